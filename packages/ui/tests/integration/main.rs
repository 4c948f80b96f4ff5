mod dictionary_tests;
mod resolution_tests;
