pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_assignment::Entity as AircraftAssignment;
pub use super::airport::Entity as Airport;
pub use super::city::Entity as City;
pub use super::country::Entity as Country;
pub use super::department::Entity as Department;
pub use super::employee::Entity as Employee;
pub use super::employee_assignment::Entity as EmployeeAssignment;
pub use super::flight::Entity as Flight;
pub use super::job::Entity as Job;
