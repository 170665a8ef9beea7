mod analyzer_tests;
mod frequency_tests;
