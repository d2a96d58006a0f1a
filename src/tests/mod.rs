mod concurrent_tests;
mod generator_tests;
