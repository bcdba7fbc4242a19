pub mod aircraft;
pub mod aircraft_assignment;
pub mod airport;
pub mod city;
pub mod country;
pub mod department;
pub mod employee;
pub mod employee_assignment;
pub mod flight;
pub mod job;

#[cfg(test)]
mod test;
