use crate::domain::model::FormSnapshot;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "concordia-contact")]
#[command(about = "Validate a contact form and build the WhatsApp hand-off link")]
pub struct CliConfig {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "", help = "Service code, e.g. reparacion")]
    pub service: String,

    #[arg(long)]
    pub message: String,

    #[arg(long, help = "Path to a TOML site configuration")]
    pub config: Option<String>,

    #[arg(long, help = "Only validate and print the composed message")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }
}
