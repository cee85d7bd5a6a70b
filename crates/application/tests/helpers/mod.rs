mod mock_repositories;

pub use mock_repositories::{MockDnsResolver, MockHostTable};
