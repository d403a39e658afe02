////////////////////////////////////////////////////////////////////////////////
// File: src/io/os.rs
// Description: OS interaction module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{
  collections::BTreeSet,
  ffi::OsStr,
  fs,
  path::{Path, PathBuf},
};

use crate::{info_print, util::settings::Setting, util::traits::Serializable};

use anyhow::{anyhow, bail, Result};

////////////////////////////////////////////////////////////////////////////////
// Filesystem Interactions
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct FileInfo {
  pub name: String,
  pub stem: String,
  pub path: PathBuf,
  pub content: String,
}

fn file_stem(path: &Path) -> Result<String> {
  return path
    .file_stem()
    .and_then(OsStr::to_str)
    .map(str::to_string)
    .ok_or_else(|| {
      return anyhow!("(ArgError) Invalid file name: `{}`", path.display());
    });
}

impl FileInfo {
  pub fn new(name: String, path: PathBuf, content: String) -> Result<Self> {
    return Ok(Self {
      name,
      stem: file_stem(&path)?,
      path,
      content,
    });
  }

  pub fn from_path(
    path: PathBuf,
    file_extension: Option<&str>,
  ) -> Result<Self> {
    let path_str = path.display().to_string();

    if let Some(file_extension) = file_extension {
      if path.extension() != Some(OsStr::new(file_extension)) {
        bail!(
          "(ArgError) Invalid file extension on file: `{}`. Expected extension `.{}`",
          path_str,
          file_extension
        );
      }
    }

    let content = fs::read_to_string(&path)
      .map_err(|e| return anyhow!("(IOError) [{}] {}", path_str, e))?
      .replace("\r\n", "\n");

    return Self::new(path_str, path, content);
  }

  pub fn set_file_name(&mut self, name: &str, extension: &str) -> Result<()> {
    self.name = name.to_string();
    self.path.set_file_name(name);
    self.path.set_extension(extension);
    self.stem = file_stem(&self.path)?;
    return Ok(());
  }
}

/// Reads every listed file, expanding directories to the files with the given
/// extension they contain. The result is sorted by path.
pub fn read_file_list(
  paths: &[String],
  file_extension: &str,
) -> Result<Vec<FileInfo>> {
  let mut file_paths = BTreeSet::new();
  let mut explicit_files = BTreeSet::new();

  for x in paths {
    let path = PathBuf::from(x);

    if path.is_dir() {
      let dir_entries = fs::read_dir(&path)
        .map_err(|e| return anyhow!("(IOError) [{}] {}", path.display(), e))?;

      for entry in dir_entries {
        let entry_path = entry
          .map_err(|e| {
            return anyhow!("(IOError) Failed to read directory entry: {}", e);
          })?
          .path();

        if entry_path.is_file()
          && entry_path.extension() == Some(OsStr::new(file_extension))
        {
          file_paths.insert(entry_path);
        }
      }
    } else {
      explicit_files.insert(path);
    }
  }

  let mut file_info_list = Vec::with_capacity(file_paths.len());

  for path in file_paths {
    file_info_list.push(FileInfo::from_path(path, None)?);
  }

  for path in explicit_files {
    file_info_list.push(FileInfo::from_path(path, Some(file_extension))?);
  }

  file_info_list.sort_by(|a, b| return a.path.cmp(&b.path));
  file_info_list.dedup_by(|a, b| return a.path == b.path);

  return Ok(file_info_list);
}

pub fn dir_check(path: Option<&Path>) -> Result<Option<&Path>> {
  let Some(path) = path else {
    return Ok(None);
  };

  if !path.is_dir() {
    fs::create_dir_all(path).map_err(|e| {
      return anyhow!(
        "(IOError) Failed to create output directory `{}`: {}",
        path.display(),
        e
      );
    })?;
    info_print!("Created output directory: `{}`", path.display());
  }

  return Ok(Some(path));
}

pub fn out_dir_check() -> Result<Option<PathBuf>> {
  let Ok(Some(values)) = Setting::Output.is_set() else {
    return Ok(None);
  };

  let output_dir = PathBuf::from(
    values
      .first()
      .ok_or_else(|| return anyhow!("(ArgError) No output directory given!"))?,
  );

  dir_check(Some(output_dir.as_path()))?;

  return Ok(Some(output_dir));
}

pub fn write_file(
  file_path: PathBuf,
  content: String,
) -> Result<(PathBuf, String)> {
  fs::write(&file_path, &content).map_err(|e| {
    return anyhow!(
      "(IOError) Failed to write to file `{}`: {}",
      file_path.display(),
      e
    );
  })?;

  return Ok((file_path, content));
}

/// Serializes every program and writes it next to its source file, or into
/// `output_dir` if one is given.
pub fn generate_output(
  programs: &[impl Serializable<Output = String>],
  files: &[FileInfo],
  output_dir: Option<&Path>,
  output_file_ext: &str,
) -> Result<Vec<(PathBuf, String)>> {
  return programs
    .iter()
    .zip(files)
    .map(|(program, file)| {
      let mut file_path = file.path.clone();
      file_path.set_extension(output_file_ext);

      if let Some(output_dir) = output_dir {
        let file_name = file_path.file_name().ok_or_else(|| {
          return anyhow!("(ArgError) No file name for `{}`", file.name);
        })?;

        file_path = output_dir.join(file_name);
      }

      return write_file(file_path, program.serialize());
    })
    .collect();
}
