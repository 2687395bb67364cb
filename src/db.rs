pub mod store;

pub mod user_repo;
pub use user_repo::UserRepository;
pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod service_repo;
pub use service_repo::ServiceRepository;
pub mod appointment_repo;
pub use appointment_repo::AppointmentRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod payment_repo;
pub use payment_repo::PaymentRepository;
pub mod loyalty_repo;
pub use loyalty_repo::LoyaltyRepository;
