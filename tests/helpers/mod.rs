pub mod api_test_helper;
pub mod mock_file_store;
