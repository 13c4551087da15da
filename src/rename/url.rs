use crate::error::{Result, WizardError};
use crate::git::GitRepo;
use crate::output::Output;
use regex::Regex;
use serde::Serialize;

const GIT_URL_PATTERN: &str =
    r"^(?:https://|git@)[\w.-]+[:/](?P<username>[^/]+)/(?P<repo>[^/]+)\.git$";

/// Owner and repository name of a hosted git remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitInfo {
    pub username: String,
    pub repo: String,
}

impl GitInfo {
    pub fn new(username: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repo: repo.into(),
        }
    }
}

/// Parse an HTTPS or SSH remote URL ending in `.git`.
///
/// ```
/// use wizard_template::rename::match_git_url;
///
/// let info = match_git_url("git@github.com:fschuch/wizard-template.git").unwrap();
/// assert_eq!(info.username, "fschuch");
/// assert_eq!(info.repo, "wizard-template");
/// assert!(match_git_url("not-a-repo").is_err());
/// ```
pub fn match_git_url(url: &str) -> Result<GitInfo> {
    let pattern = Regex::new(GIT_URL_PATTERN)?;
    let captures = pattern
        .captures(url)
        .ok_or_else(|| WizardError::InvalidGitUrl(url.to_string()))?;

    Ok(GitInfo::new(&captures["username"], &captures["repo"]))
}

/// Read `remote.origin.url`, falling back to asking the user.
///
/// `repo` is `None` when the project is not a git checkout at all. `ask`
/// receives the prompt text and returns the answer.
pub fn repo_info_with_fallback<F>(repo: Option<&GitRepo>, mut ask: F, out: &Output) -> Result<GitInfo>
where
    F: FnMut(&str) -> Result<String>,
{
    let parsed = match repo {
        Some(repo) => repo
            .config_get("remote.origin.url")
            .and_then(|url| match_git_url(&url)),
        None => Err(WizardError::Git("not a git repository".to_string())),
    };

    match parsed {
        Ok(info) => Ok(info),
        Err(e) => {
            tracing::debug!("origin URL unavailable: {}", e);
            out.line("Could not parse git URL, please enter the information manually.");
            let username = ask("Enter your username")?;
            let repo_name = ask("Enter your repo")?;
            Ok(GitInfo::new(username, repo_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://github.com/fschuch/wizard-template.git", "fschuch", "wizard-template")]
    #[case("git@github.com:fschuch/wizard-template.git", "fschuch", "wizard-template")]
    #[case("https://gitlab.example.org/team/my_project.git", "team", "my_project")]
    #[case("git@git.sr.ht:alice/tool.rs.git", "alice", "tool.rs")]
    fn test_match_git_url(#[case] url: &str, #[case] username: &str, #[case] repo: &str) {
        assert_eq!(match_git_url(url).unwrap(), GitInfo::new(username, repo));
    }

    #[rstest]
    #[case("not-a-repo")]
    #[case("https://github.com/fschuch/wizard-template")]
    #[case("http://github.com/fschuch/wizard-template.git")]
    #[case("https://github.com/group/sub/repo.git")]
    #[case("https://github.com/fschuch/wizard-template.git\n")]
    fn test_match_git_url_rejects(#[case] url: &str) {
        let err = match_git_url(url).unwrap_err();
        assert!(err.to_string().starts_with("Could not parse git URL"));
    }

    #[test]
    fn test_fallback_asks_when_not_a_repository() {
        let mut prompts = Vec::new();
        let mut answers = vec!["me".to_string(), "proj".to_string()].into_iter();
        let info = repo_info_with_fallback(
            None,
            |prompt| {
                prompts.push(prompt.to_string());
                Ok(answers.next().unwrap())
            },
            &Output::quiet(),
        )
        .unwrap();

        assert_eq!(info, GitInfo::new("me", "proj"));
        assert_eq!(prompts, vec!["Enter your username", "Enter your repo"]);
    }

    proptest! {
        #[test]
        fn prop_https_and_ssh_agree(
            host in "[a-z][a-z0-9.-]{0,12}",
            user in "[A-Za-z0-9_-]{1,12}",
            repo in "[A-Za-z0-9_-]{1,12}",
        ) {
            let https = match_git_url(&format!("https://{host}/{user}/{repo}.git")).unwrap();
            let ssh = match_git_url(&format!("git@{host}:{user}/{repo}.git")).unwrap();
            prop_assert_eq!(&https, &ssh);
            prop_assert_eq!(https, GitInfo::new(user, repo));
        }
    }
}
