mod crawl_tests;
mod server_tests;
