pub mod language;
pub mod session;

pub use language::{use_language, Language, LanguageProvider};
pub use session::{use_session, SessionAction, SessionProvider};
