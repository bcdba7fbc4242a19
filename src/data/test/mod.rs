mod aircraft_assignment;
mod airport;
mod country;
mod employee;
mod flight;
