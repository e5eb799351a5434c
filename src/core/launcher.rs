use crate::config::LauncherConfig;
use crate::core::{Storage, Task};
use crate::utils::error::Result;

pub const CONFIRMATION_MESSAGE: &str = "Flutter script fixed successfully!";

/// Bash launcher that resolves its own location through symlinks, then hands off
/// to `flutter.bat` on Windows shells or to `internal/shared.sh` elsewhere.
/// Every line ends in `\n` whatever the host platform.
pub const LAUNCHER_SCRIPT: &str = concat!(
    "#!/usr/bin/env bash\n",
    "set -e\n",
    "unset CDPATH\n",
    "function follow_links() (\n",
    "  cd -P \"$(dirname -- \"$1\")\"\n",
    "  file=\"$PWD/$(basename -- \"$1\")\"\n",
    "  while [[ -h \"$file\" ]]; do\n",
    "    cd -P \"$(dirname -- \"$file\")\"\n",
    "    file=\"$(readlink -- \"$file\")\"\n",
    "    cd -P \"$(dirname -- \"$file\")\"\n",
    "    file=\"$PWD/$(basename -- \"$file\")\"\n",
    "  done\n",
    "  echo \"$file\"\n",
    ")\n",
    "PROG_NAME=\"$(follow_links \"${BASH_SOURCE[0]}\")\"\n",
    "BIN_DIR=\"$(cd \"${PROG_NAME%/*}\" ; pwd -P)\"\n",
    "SHARED_NAME=\"$BIN_DIR/internal/shared.sh\"\n",
    "OS=\"$(uname -s)\"\n",
    "if [[ $OS =~ MINGW.* || $OS =~ CYGWIN.* || $OS =~ MSYS.* ]]; then\n",
    "  exec \"${BIN_DIR}/flutter.bat\" \"$@\"\n",
    "fi\n",
    "source \"$SHARED_NAME\"\n",
    "shared::execute \"$@\"\n",
);

pub struct LauncherTask<S: Storage> {
    storage: S,
    config: LauncherConfig,
}

impl<S: Storage> LauncherTask<S> {
    pub fn new(storage: S, config: LauncherConfig) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Task for LauncherTask<S> {
    fn name(&self) -> &str {
        "launcher-gen"
    }

    async fn execute(&self) -> Result<String> {
        tracing::debug!("Writing launcher script to: {}", self.config.output_path.display());
        self.storage
            .write_file(&self.config.output_path, LAUNCHER_SCRIPT.as_bytes())
            .await?;

        Ok(format!("{}\n", CONFIRMATION_MESSAGE))
    }
}
