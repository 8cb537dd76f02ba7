pub mod value_tests;
