//! Git repository initialization for freshly generated projects.
use git2::{IndexAddOption, Oid, Repository, Signature};
use log::debug;
use std::path::Path;

use crate::constants::{APP_NAME, FALLBACK_COMMIT_EMAIL, INITIAL_COMMIT_MESSAGE};
use crate::error::{Error, Result};

/// Drops characters libgit2 rejects in signature fields.
fn signature_field(value: &str) -> String {
    let kept: String =
        value.chars().filter(|c| *c != '<' && *c != '>' && !c.is_control()).collect();
    kept.trim().to_string()
}

/// Signature used when git has no identity configured.
///
/// `author` may be a plain name or `Name <email>`. An empty name becomes
/// `scaffolder` and a missing email becomes `scaffolder@localhost`.
pub fn fallback_signature(author: &str) -> Result<Signature<'static>> {
    let (name, email) = match author.split_once('<') {
        Some((name, rest)) => (name, rest.split_once('>').map_or(rest, |(email, _)| email)),
        None => (author, ""),
    };

    let name = signature_field(name);
    let email = signature_field(email);
    let name = if name.is_empty() { APP_NAME } else { name.as_str() };
    let email = if email.is_empty() { FALLBACK_COMMIT_EMAIL } else { email.as_str() };
    Ok(Signature::now(name, email)?)
}

fn commit_all(repo: &Repository, fallback: &Signature<'_>) -> Result<Oid> {
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let signature = match repo.signature() {
        Ok(signature) => signature,
        Err(e) => {
            debug!("No git identity configured ({}), using fallback signature", e.message());
            fallback.to_owned()
        }
    };
    Ok(repo.commit(Some("HEAD"), &signature, &signature, INITIAL_COMMIT_MESSAGE, &tree, &[])?)
}

/// Initializes a repository at `project_root` and commits every file that is
/// not ignored by the project's `.gitignore`.
///
/// A `.git` directory created here is removed again when a later step fails.
///
/// # Returns
/// * `Result<Oid>` - Id of the initial commit
///
/// # Errors
/// * `Error::Vcs` for any libgit2 failure. Callers treat it as a warning.
pub fn init_repository<P: AsRef<Path>>(project_root: P, author: &str) -> Result<Oid> {
    let project_root = project_root.as_ref();
    debug!("Initializing git repository in '{}'.", project_root.display());

    let fallback = fallback_signature(author)?;
    let git_dir = project_root.join(".git");
    let existed = git_dir.exists();

    let committed = Repository::init(project_root)
        .map_err(Error::from)
        .and_then(|repo| commit_all(&repo, &fallback));
    match committed {
        Ok(oid) => {
            debug!("Created initial commit {}", oid);
            Ok(oid)
        }
        Err(e) => {
            if !existed && git_dir.exists() {
                if let Err(cleanup) = std::fs::remove_dir_all(&git_dir) {
                    debug!("Failed to remove '{}': {}", git_dir.display(), cleanup);
                }
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_signature_splits_name_and_email() {
        let signature = fallback_signature("Jane Doe <jane@example.com>").unwrap();
        assert_eq!(signature.name(), Some("Jane Doe"));
        assert_eq!(signature.email(), Some("jane@example.com"));
    }

    #[test]
    fn test_fallback_signature_defaults() {
        let signature = fallback_signature("").unwrap();
        assert_eq!(signature.name(), Some(APP_NAME));
        assert_eq!(signature.email(), Some(FALLBACK_COMMIT_EMAIL));

        let signature = fallback_signature("Jane Doe").unwrap();
        assert_eq!(signature.name(), Some("Jane Doe"));
        assert_eq!(signature.email(), Some(FALLBACK_COMMIT_EMAIL));
    }

    #[test]
    fn test_fallback_signature_drops_stray_brackets() {
        let signature = fallback_signature("Jane >Doe< <>").unwrap();
        assert_eq!(signature.name(), Some("Jane Doe"));
        assert_eq!(signature.email(), Some(FALLBACK_COMMIT_EMAIL));

        let signature = fallback_signature("<jane@example.com>").unwrap();
        assert_eq!(signature.name(), Some(APP_NAME));
        assert_eq!(signature.email(), Some("jane@example.com"));
    }
}
