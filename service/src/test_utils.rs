use std::ops::Deref;

use abi::Config;
use sqlx_db_tester::TestDb;

/// Config pointing at a throwaway database that is dropped with the value.
pub struct TestConfig {
    #[allow(dead_code)]
    tdb: TestDb,
    pub config: Config,
}

impl Deref for TestConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

impl TestConfig {
    pub fn new(filename: &str, port: u16) -> Self {
        let mut config = Config::load(filename).unwrap();
        let tdb = TestDb::new(
            config.db.host.clone(),
            config.db.port,
            config.db.user.clone(),
            config.db.password.clone(),
            "../migrations",
        );
        config.db.dbname = tdb.dbname.clone();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        Self { tdb, config }
    }

    pub fn with_port(port: u16) -> Self {
        Self::new("fixtures/config.yml", port)
    }
}
