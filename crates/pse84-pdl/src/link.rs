//! Where the prebuilt PDL/BSP archive comes from.
//!
//! Shared between `build.rs` and the unit tests; nothing here is part of
//! the library API.

use core::fmt;

/// Directory holding the static archive built by the board project
pub const LIB_DIR_VAR: &str = "PSE84_BSP_LIB_DIR";
/// Archive name override, with or without `lib` prefix and `.a` suffix
pub const LIB_NAME_VAR: &str = "PSE84_BSP_LIB";
pub const DEFAULT_LIB: &str = "pse84_bsp";

#[derive(Debug, PartialEq, Eq)]
pub struct LinkPlan<'a> {
    pub search: &'a str,
    pub lib: &'a str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LinkError {
    MissingLibDir,
    EmptyLibName,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::MissingLibDir => write!(
                f,
                "{} is not set: point it at the directory holding lib{}.a \
                 (PDL, BSP and generated configuration for the CM33 project)",
                LIB_DIR_VAR, DEFAULT_LIB
            ),
            LinkError::EmptyLibName => write!(f, "{} names no library", LIB_NAME_VAR),
        }
    }
}

/// Link arguments from the values of [`LIB_DIR_VAR`] and [`LIB_NAME_VAR`].
pub fn plan<'a>(dir: Option<&'a str>, name: Option<&'a str>) -> Result<LinkPlan<'a>, LinkError> {
    let search = match dir.map(str::trim) {
        Some(dir) if !dir.is_empty() => dir,
        _ => return Err(LinkError::MissingLibDir),
    };

    let lib = match name.map(str::trim) {
        None => DEFAULT_LIB,
        Some(name) => {
            let name = name.strip_suffix(".a").unwrap_or(name);
            name.strip_prefix("lib").unwrap_or(name)
        }
    };
    if lib.is_empty() {
        return Err(LinkError::EmptyLibName);
    }

    Ok(LinkPlan { search, lib })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_archive() {
        assert_eq!(
            plan(Some("/opt/bsp/lib"), None),
            Ok(LinkPlan {
                search: "/opt/bsp/lib",
                lib: "pse84_bsp",
            })
        );
    }

    #[test]
    fn archive_name_is_normalized() {
        assert_eq!(plan(Some("out"), Some("libmtb.a")).map(|p| p.lib), Ok("mtb"));
        assert_eq!(plan(Some("out"), Some("mtb")).map(|p| p.lib), Ok("mtb"));
        assert_eq!(plan(Some("out"), Some(" libmtb ")).map(|p| p.lib), Ok("mtb"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert_eq!(plan(None, None), Err(LinkError::MissingLibDir));
        assert_eq!(plan(Some("  "), None), Err(LinkError::MissingLibDir));
    }

    #[test]
    fn empty_name_is_an_error() {
        assert_eq!(plan(Some("out"), Some("lib.a")), Err(LinkError::EmptyLibName));
    }

    #[test]
    fn missing_directory_message_names_the_variable() {
        let msg = std::format!("{}", LinkError::MissingLibDir);
        assert!(msg.starts_with("PSE84_BSP_LIB_DIR is not set"));
        assert!(msg.contains("libpse84_bsp.a"));
    }
}
