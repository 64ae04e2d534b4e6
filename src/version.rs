//! `num -version` output.

use std::fmt;

/// Release number and the build details `build.rs` embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub number: &'static str,
    pub commit: Option<&'static str>,
    pub built: Option<&'static str>,
    pub target: &'static str,
    pub rustc: Option<&'static str>,
}

/// The running binary.
pub const CURRENT: Version = Version {
    number: env!("CARGO_PKG_VERSION"),
    commit: option_env!("NUM_GIT_HASH"),
    built: option_env!("NUM_BUILD_DATE"),
    target: env!("TARGET"),
    rustc: option_env!("NUM_RUSTC_VERSION"),
};

impl fmt::Display for Version {
    /// ```text
    /// num 0.1.0 (3f2a9c1 2026-10-17T09:12:44Z)
    /// Num is the CLI to transform integers and characters.
    /// x86_64-unknown-linux-gnu, rustc 1.82.0
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "num {}", self.number)?;
        let provenance: Vec<&str> = [self.commit, self.built].into_iter().flatten().collect();
        if !provenance.is_empty() {
            write!(f, " ({})", provenance.join(" "))?;
        }
        writeln!(f)?;
        writeln!(f, "Num is the CLI to transform integers and characters.")?;
        f.write_str(self.target)?;
        if let Some(rustc) = self.rustc {
            write!(f, ", rustc {}", rustc)?;
        }
        Ok(())
    }
}
