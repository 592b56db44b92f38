//! The output writer: persists each generated unit as an artifact next to its source, or streams
//! every unit to stdout.

use std::{
    fmt::Display,
    io::Write,
    path::{
        Path,
        PathBuf,
    },
};

use enkodo_codegen::{
    generate_path,
    parse::field_descriptor::SkipReason,
    render::{
        registry::ConverterRegistry,
        unit::GeneratedUnit,
    },
    Error,
};

/// A generated unit rendered to source text. Holds no token streams, so it can leave the worker
/// thread that generated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    pub source: PathBuf,
    /// Empty when no record emitted anything.
    pub text: String,
    /// Records that produced impls.
    pub records: usize,
    pub skipped: Vec<SkippedNote>,
}

/// An annotated field left out of a record, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNote {
    pub record: String,
    pub field: String,
    pub reason: SkipReason,
}

impl Display for SkippedNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.record, self.field, self.reason)
    }
}

impl RenderedUnit {
    pub fn new(source: &Path, unit: &GeneratedUnit) -> Self {
        let skipped = unit
            .records
            .iter()
            .flat_map(|record| {
                record.skipped.iter().map(|field| SkippedNote {
                    record: record.ident.to_string(),
                    field: field.ident.to_string(),
                    reason: field.reason.clone(),
                })
            })
            .collect();

        Self {
            source: source.to_path_buf(),
            text: unit.to_source_string(),
            records: unit.emitted().count(),
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

/// Generates and renders one source file.
pub fn render_path(source: &Path, registry: &ConverterRegistry) -> Result<RenderedUnit, Error> {
    let unit = generate_path(source, registry)?;

    Ok(RenderedUnit::new(source, &unit))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// `<stem><suffix>.rs` next to each source.
    Files { suffix: String },
    Stdout,
}

impl OutputMode {
    /// Writes one non-empty unit. Returns the artifact path in file mode.
    pub fn write(
        &self,
        unit: &RenderedUnit,
        stdout: &mut impl Write,
    ) -> Result<Option<PathBuf>, Error> {
        match self {
            Self::Files { suffix } => {
                let path = artifact_path(&unit.source, suffix);
                let text = render_artifact(&path, unit);
                std::fs::write(&path, text).map_err(|source| Error::Persist {
                    path: path.clone(),
                    source,
                })?;

                Ok(Some(path))
            }
            Self::Stdout => {
                writeln!(stdout, "// {}\n{}", unit.source.display(), unit.text).map_err(
                    |source| Error::Persist {
                        path: PathBuf::from("-"),
                        source,
                    },
                )?;

                Ok(None)
            }
        }
    }
}

pub fn artifact_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    source.with_file_name(format!("{stem}{suffix}.rs"))
}

fn render_artifact(artifact: &Path, unit: &RenderedUnit) -> String {
    let file_name = |path: &Path| {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    format!(
        "// Code generated by enkodo from {}. DO NOT EDIT.\n\
         // Pull it in next to the records with `include!(\"{}\");`\n\n\
         {}\n",
        file_name(&unit.source),
        file_name(artifact),
        unit.text,
    )
}
