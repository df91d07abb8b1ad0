//! Show or change Unix permissions per party.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathclerk::fs::{self, Party, Permission};
use serde::Serialize;
use std::path::PathBuf;

/// Show or change who may read, write or execute an item.
#[derive(Args)]
pub struct PermsCommand {
    /// File or directory to inspect
    pub item: PathBuf,

    /// Party to inspect or change: user, group, others or all
    #[arg(long, short)]
    pub party: Option<Party>,

    /// Permission to give: none, r, w, rw or x
    #[arg(long, value_name = "PERMISSION")]
    pub set: Option<Permission>,

    /// Also change everything inside a directory
    #[arg(long, short, requires = "set")]
    pub recursive: bool,
}

#[derive(Serialize)]
struct Grant {
    party: Party,
    permission: Permission,
}

impl PermsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(permission) = self.set {
            let party = self.party.unwrap_or(Party::All);
            fs::change_perms(&self.item, permission, party, self.recursive)?;
            log::info!("gave {party} {permission} on {}", self.item.display());
            return Ok(());
        }

        let grants: Vec<Grant> = match self.party {
            Some(party) => vec![Grant {
                party,
                permission: fs::check_perms(&self.item, party)?,
            }],
            None => fs::check_all_perms(&self.item)?
                .into_iter()
                .map(|(party, permission)| Grant { party, permission })
                .collect(),
        };

        let text = grants
            .iter()
            .map(|g| format!("{}: {}", g.party, g.permission))
            .collect::<Vec<_>>()
            .join("\n");
        emit(global.output_format()?, &grants, &text)
    }
}
