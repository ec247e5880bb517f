pub mod builders;
pub mod dns_server_mock;
pub mod mock_exchange;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use dns_server_mock::MockDnsServer;
#[allow(unused_imports)]
pub use mock_exchange::ScriptedExchange;
