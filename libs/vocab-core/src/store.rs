//! In-memory entity store.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Result, StoreError};
use crate::history::{recent_unique_word_ids, words_over_time, RECENT_SEARCH_LIMIT};
use crate::progress::record_activity;
use crate::types::*;

/// Records of one kind keyed by an auto-incrementing id.
///
/// Ids start at 1 and are never reused, so iteration order is insertion order.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: Id) -> Option<&T> {
        self.rows.get(&id)
    }

    fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.values().find(|row| pred(*row))
    }

    fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.rows.values_mut().find(|row| pred(&**row))
    }

    fn filter<'a>(&'a self, pred: impl Fn(&T) -> bool + 'a) -> impl Iterator<Item = &'a T> + 'a {
        self.rows.values().filter(move |row| pred(*row))
    }

    fn remove(&mut self, id: Id) -> Option<T> {
        self.rows.remove(&id)
    }
}

/// Authoritative holder of users, words, saved-word links, search history,
/// quizzes and progress rows.
#[derive(Debug, Default)]
pub struct MemStore {
    users: Table<User>,
    words: Table<Word>,
    saved_words: Table<SavedWord>,
    search_history: Table<SearchHistoryEntry>,
    quizzes: Table<Quiz>,
    user_progress: Table<UserProgress>,
}

impl MemStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the demo user (id 1) and their progress row.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        if let Ok(user) = store.create_user(NewUser {
            username: "demouser".to_string(),
            password: "password".to_string(),
            display_initials: "JD".to_string(),
        }) {
            store.create_user_progress(NewUserProgress {
                user_id: user.id,
                words_learned: 15,
                weekly_goal: DEFAULT_WEEKLY_GOAL,
                streak_days: 7,
            });
        }
        store
    }

    // === Users ===

    pub fn create_user(&mut self, user: NewUser) -> Result<User> {
        if self.get_user_by_username(&user.username).is_some() {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        Ok(self.users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
            display_initials: user.display_initials,
        }))
    }

    pub fn get_user(&self, id: Id) -> Option<User> {
        self.users.get(id).cloned()
    }

    /// Exact, case-sensitive username match.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|u| u.username == username).cloned()
    }

    // === Words ===

    /// Store a new word. Word text must be unique ignoring case.
    pub fn create_word(&mut self, draft: WordDraft) -> Result<Word> {
        self.create_word_at(draft, Utc::now())
    }

    pub fn create_word_at(&mut self, draft: WordDraft, now: DateTime<Utc>) -> Result<Word> {
        if self.get_word_by_word(&draft.word).is_some() {
            return Err(StoreError::DuplicateWord(draft.word));
        }
        Ok(self.words.insert_with(|id| draft.into_word(id, now)))
    }

    pub fn get_word_by_id(&self, id: Id) -> Option<Word> {
        self.words.get(id).cloned()
    }

    /// Case-insensitive exact match; the earliest stored word wins.
    pub fn get_word_by_word(&self, text: &str) -> Option<Word> {
        let needle = text.to_lowercase();
        self.words
            .find(|w| w.word.to_lowercase() == needle)
            .cloned()
    }

    /// First flagged word in insertion order.
    pub fn get_word_of_the_day(&self) -> Option<Word> {
        self.words.find(|w| w.is_word_of_the_day).cloned()
    }

    /// Flag an existing word as word of the day.
    pub fn mark_word_of_the_day(&mut self, id: Id) -> Result<Word> {
        let word = self.words.get_mut(id).ok_or(StoreError::WordNotFound(id))?;
        word.is_word_of_the_day = true;
        Ok(word.clone())
    }

    fn resolve_word(&self, id: Id) -> Result<Word> {
        self.get_word_by_id(id).ok_or(StoreError::DanglingWord(id))
    }

    // === Saved words ===

    /// Link a word to a user. Saving an existing pair returns the existing link.
    pub fn save_word(&mut self, user_id: Id, word_id: Id) -> SavedWord {
        if let Some(existing) = self.find_saved(user_id, word_id) {
            return existing.clone();
        }
        let now = Utc::now();
        self.saved_words.insert_with(|id| SavedWord {
            id,
            user_id,
            word_id,
            timestamp: now,
        })
    }

    /// Words saved by a user, in the order they were saved.
    pub fn get_saved_words(&self, user_id: Id) -> Result<Vec<Word>> {
        self.saved_words
            .filter(move |sw| sw.user_id == user_id)
            .map(|sw| self.resolve_word(sw.word_id))
            .collect()
    }

    /// Delete the link if present. Returns whether a link was removed.
    pub fn remove_saved_word(&mut self, user_id: Id, word_id: Id) -> bool {
        let Some(id) = self.find_saved(user_id, word_id).map(|sw| sw.id) else {
            return false;
        };
        self.saved_words.remove(id).is_some()
    }

    fn find_saved(&self, user_id: Id, word_id: Id) -> Option<&SavedWord> {
        self.saved_words
            .find(|sw| sw.user_id == user_id && sw.word_id == word_id)
    }

    // === Search history ===

    /// Append a search event. Repeated searches are all recorded.
    pub fn add_to_search_history(&mut self, user_id: Id, word_id: Id) -> SearchHistoryEntry {
        self.add_to_search_history_at(user_id, word_id, Utc::now())
    }

    pub fn add_to_search_history_at(
        &mut self,
        user_id: Id,
        word_id: Id,
        now: DateTime<Utc>,
    ) -> SearchHistoryEntry {
        self.search_history.insert_with(|id| SearchHistoryEntry {
            id,
            user_id,
            word_id,
            timestamp: now,
        })
    }

    /// Up to five distinct words, most recently searched first.
    pub fn get_search_history(&self, user_id: Id) -> Result<Vec<Word>> {
        let entries = self.search_history.filter(move |e| e.user_id == user_id);
        recent_unique_word_ids(entries, RECENT_SEARCH_LIMIT)
            .into_iter()
            .map(|id| self.resolve_word(id))
            .collect()
    }

    /// Daily search counts for the `days` days ending at `today`.
    pub fn get_words_over_time(&self, user_id: Id, today: NaiveDate, days: u32) -> Vec<DailyCount> {
        let entries = self.search_history.filter(move |e| e.user_id == user_id);
        words_over_time(entries, today, days)
    }

    // === Quizzes ===

    pub fn create_quiz(&mut self, quiz: NewQuiz) -> Quiz {
        let now = Utc::now();
        self.quizzes.insert_with(|id| Quiz {
            id,
            user_id: quiz.user_id,
            score: quiz.score,
            total_questions: quiz.total_questions,
            timestamp: now,
        })
    }

    /// Quizzes for a user, newest first.
    pub fn get_quizzes(&self, user_id: Id) -> Vec<Quiz> {
        let mut quizzes: Vec<Quiz> = self
            .quizzes
            .filter(move |q| q.user_id == user_id)
            .cloned()
            .collect();
        quizzes.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));
        quizzes
    }

    // === User progress ===

    pub fn get_user_progress(&self, user_id: Id) -> Option<UserProgress> {
        self.user_progress.find(|p| p.user_id == user_id).cloned()
    }

    pub fn create_user_progress(&mut self, progress: NewUserProgress) -> UserProgress {
        let now = Utc::now();
        self.user_progress.insert_with(|id| UserProgress {
            id,
            user_id: progress.user_id,
            words_learned: progress.words_learned,
            weekly_goal: progress.weekly_goal,
            streak_days: progress.streak_days,
            last_active: now,
        })
    }

    /// Record one learned word for the user now.
    pub fn update_user_progress(&mut self, user_id: Id) -> UserProgress {
        self.update_user_progress_at(user_id, Utc::now())
    }

    /// Record one learned word at `now`, creating the progress row on first use.
    pub fn update_user_progress_at(&mut self, user_id: Id, now: DateTime<Utc>) -> UserProgress {
        if let Some(progress) = self.user_progress.find_mut(|p| p.user_id == user_id) {
            record_activity(progress, now);
            return progress.clone();
        }

        self.user_progress.insert_with(|id| UserProgress {
            id,
            user_id,
            words_learned: 1,
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            streak_days: 1,
            last_active: now,
        })
    }

    /// Set the weekly goal, creating an empty progress row if needed.
    pub fn update_weekly_goal(&mut self, user_id: Id, weekly_goal: u32) -> UserProgress {
        if let Some(progress) = self.user_progress.find_mut(|p| p.user_id == user_id) {
            progress.weekly_goal = weekly_goal;
            return progress.clone();
        }

        self.create_user_progress(NewUserProgress {
            user_id,
            words_learned: 0,
            weekly_goal,
            streak_days: 0,
        })
    }
}
