mod aircraft;
mod airport;
mod city;
mod employee;
