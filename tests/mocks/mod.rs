//! Hand-written mock repositories shared by the service tests.

mod mock_contact_repository;
mod mock_user_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_user_repository::MockUserRepository;
