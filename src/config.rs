use std::path::PathBuf;

const METADATA_URL: &str =
    "https://repo.maven.apache.org/maven2/net/sourceforge/plantuml/plantuml/maven-metadata.xml";
const ARTIFACT_URL: &str =
    "https://repo.maven.apache.org/maven2/net/sourceforge/plantuml/plantuml/{VERSION}/plantuml-{VERSION}.jar";
const TARGET_FILE: &str = "./bin/plantuml.jar";

/// Where the release metadata and the artifact live, and where the artifact goes
#[derive(Debug, Clone)]
pub struct Config {
    pub metadata_url: String,
    /// `{VERSION}` is replaced with the dotted version string
    pub artifact_url: String,
    pub target: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metadata_url: METADATA_URL.to_owned(),
            artifact_url: ARTIFACT_URL.to_owned(),
            target: PathBuf::from(TARGET_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let config = Config::default();
        assert_eq!(config.target, PathBuf::from("./bin/plantuml.jar"));
        assert_eq!(config.target.parent(), Some(std::path::Path::new("./bin")));
    }

    #[test]
    fn test_artifact_template() {
        let config = Config::default();
        assert_eq!(config.artifact_url.matches("{VERSION}").count(), 2);
        assert!(config.metadata_url.ends_with("/maven-metadata.xml"));
    }
}
