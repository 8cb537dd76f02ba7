mod profile_tests;
mod writer_tests;
