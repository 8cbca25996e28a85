pub mod callback_dispatcher;
pub mod interview_repository;
pub mod notifier;
