pub mod mock_publisher;
