use axum_test::TestServer;
use batchsort_config::Config;
use batchsort_server::create_app;

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn test_server() -> TestServer {
    test_server_with(Config::default())
}

#[allow(unused)]
pub fn test_server_with(config: Config) -> TestServer {
    TestServer::new(create_app(&config)).expect("build test server")
}
