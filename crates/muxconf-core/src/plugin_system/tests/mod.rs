mod deployment_tests;
mod display_tests;
