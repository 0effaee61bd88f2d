pub mod dns;
pub mod records;

// Re-export use cases
pub use dns::HandleQuestionUseCase;
pub use records::{AddRecordsUseCase, RemoveRecordsUseCase};
