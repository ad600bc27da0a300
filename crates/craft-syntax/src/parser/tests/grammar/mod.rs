mod arch_tests;
mod scenarios_tests;
mod services_tests;
mod structures_tests;
mod trivia_tests;
