mod slurm_host;
mod slurm_port;

pub use slurm_host::SlurmHost;
pub use slurm_port::{DEFAULT_CONTROLLER_PORT, SlurmPort};
