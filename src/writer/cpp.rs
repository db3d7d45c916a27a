//! Emit the C++ definition unit fed to the interpreter as the first stage.
//!
//! The unit is kept as typed fragments and only turned into text by
//! `Display`, so callers can inspect what will be compiled without parsing
//! it back.

use crate::model::SynthesisContext;
use std::fmt;

/// Always defined, before any caller-supplied macro.
pub const FEATURE_MACROS: &[&str] = &[
    "URHO3D_CLING",
    "URHO3D_API",
    "URHO3D_ANGELSCRIPT",
    "URHO3D_LUA",
    "URHO3D_NAVIGATION",
    "URHO3D_NETWORK",
    // spelled `DURHO3D_URHO2D` in the cling driver this set was taken from
    "URHO3D_URHO2D",
    "URHO3D_PHYSICS",
    "URHO3D_IK",
];

pub const UMBRELLA_HEADER: &str = "Urho3DAll.h";
pub const PROXY_CLASS: &str = "Urho3DClingProxyApplication";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `#define NAME [VALUE]`
    Define { name: String, value: Option<String> },
    /// `#include <..>` when `system`, else `#include ".."`
    Include { path: String, system: bool },
    /// Verbatim declaration (platform shims).
    Shim(String),
    ProxyClass(ProxyClass),
}

/// Subclass of the user's application that pins the resource prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClass {
    pub name: String,
    pub base: String,
    pub resource_prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unit {
    pub fragments: Vec<Fragment>,
}

impl Unit {
    pub fn defines(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Define { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Quoted includes in submission order.
    pub fn source_includes(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Include { path, system: false } => Some(path.as_str()),
            _ => None,
        })
    }

    pub fn proxy_class(&self) -> Option<&ProxyClass> {
        self.fragments.iter().find_map(|f| match f {
            Fragment::ProxyClass(class) => Some(class),
            _ => None,
        })
    }
}

/// Build the definition unit. Same context in, same fragments out.
pub fn synthesize(ctx: &SynthesisContext) -> Unit {
    let mut fragments = Vec::new();

    // ---------------------------------------------------------------
    // 1. Macros – fixed feature set, then caller-supplied
    // ---------------------------------------------------------------
    for name in FEATURE_MACROS {
        fragments.push(Fragment::Define {
            name: name.to_string(),
            value: None,
        });
    }
    fragments.extend(ctx.defines.iter().map(|d| parse_define(d)));

    // ---------------------------------------------------------------
    // 2. Umbrella header and platform shims
    // ---------------------------------------------------------------
    fragments.push(Fragment::Include {
        path: UMBRELLA_HEADER.to_string(),
        system: true,
    });
    fragments.extend(
        ctx.platform
            .shims()
            .iter()
            .map(|s| Fragment::Shim(s.to_string())),
    );

    // ---------------------------------------------------------------
    // 3. Compilation units. Headers come in through the umbrella and the
    //    units themselves; including them again redefines symbols.
    // ---------------------------------------------------------------
    fragments.extend(
        ctx.scan
            .compilation_units
            .iter()
            .map(|path| Fragment::Include {
                path: path.clone(),
                system: false,
            }),
    );

    // ---------------------------------------------------------------
    // 4. Proxy application
    // ---------------------------------------------------------------
    fragments.push(Fragment::ProxyClass(ProxyClass {
        name: PROXY_CLASS.to_string(),
        base: ctx.application_class.clone(),
        resource_prefix: ctx.resource_prefix.clone(),
    }));

    Unit { fragments }
}

/// `NAME=VALUE` becomes `#define NAME VALUE`; anything else is kept whole.
fn parse_define(define: &str) -> Fragment {
    match define.split_once('=') {
        Some((name, value)) => Fragment::Define {
            name: name.trim().to_string(),
            value: Some(value.to_string()),
        },
        None => Fragment::Define {
            name: define.trim().to_string(),
            value: None,
        },
    }
}

/// String-literal escaping; header names in `#include "..."` take no escapes.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Define { name, value: None } => writeln!(f, "#define {name}"),
            Fragment::Define {
                name,
                value: Some(value),
            } => writeln!(f, "#define {name} {value}"),
            Fragment::Include { path, system: true } => writeln!(f, "#include <{path}>"),
            Fragment::Include {
                path,
                system: false,
            } => writeln!(f, "#include \"{path}\""),
            Fragment::Shim(text) => writeln!(f, "{text}"),
            Fragment::ProxyClass(class) => writeln!(f, "{class}"),
        }
    }
}

impl fmt::Display for ProxyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ProxyClass {
            name,
            base,
            resource_prefix,
        } = self;
        writeln!(f, "class {name} : public {base}")?;
        writeln!(f, "{{")?;
        writeln!(f, "URHO3D_OBJECT({name}, {base});")?;
        writeln!(f, "{name}(Context* context):{base}(context)")?;
        writeln!(f, "{{")?;
        writeln!(
            f,
            "engineParameters_[EP_RESOURCE_PREFIX_PATHS] = \"{}\";",
            escape(resource_prefix)
        )?;
        writeln!(f, "}}")?;
        writeln!(f, "}};")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
