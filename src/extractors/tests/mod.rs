mod form_tests;
mod metadata_tests;
mod table_tests;
