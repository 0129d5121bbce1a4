//! comprand agents command

use crate::output::render_catalog;
use crate::settings::Settings;
use clap::Args;
use shared::Role;

#[derive(Debug, Args)]
pub struct AgentsCommand {
    /// Only list agents of this role
    #[arg(short, long)]
    pub role: Option<String>,
}

impl AgentsCommand {
    pub fn run(&self, settings: &Settings) -> anyhow::Result<()> {
        print!("{}", self.render(settings)?);
        Ok(())
    }

    fn render(&self, settings: &Settings) -> anyhow::Result<String> {
        let catalog = settings.config.catalog();

        let role = match self.role.as_deref() {
            Some(name) => {
                let role = Role::new(name.trim());
                catalog.agents_for(&role)?;
                Some(role)
            }
            None => None,
        };

        Ok(render_catalog(&catalog, role.as_ref()))
    }
}
