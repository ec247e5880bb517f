mod lookup_hosts;

pub use lookup_hosts::{HostReport, LookupHostsUseCase};
