pub mod history;
pub mod progress;
pub mod quizzes;
pub mod saved_words;
pub mod settings;
pub mod words;
