use std::fs;

use seedsweep_config::{AgeBasis, ConfigError, load};
use tempfile::TempDir;

#[test]
fn load_reads_document_from_disk() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("seedsweep.yml");
    fs::write(
        &path,
        "user: admin\npasswd: secret\nrpc_path: /torrent/rpc\ncriteria:\n  min_days: 60\n  max_days: 80\n  min_ratio: 3\n  age_basis: added\n",
    )?;

    let config = load(&path)?;
    assert_eq!(
        config.connection.rpc_url.as_str(),
        "http://localhost:9091/torrent/rpc"
    );
    assert_eq!(config.policy.age_basis, AgeBasis::Added);
    Ok(())
}

#[test]
fn load_reports_missing_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.yml");

    match load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => anyhow::bail!("expected io error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn load_rejects_document_without_ratio_threshold() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("seedsweep.yml");
    fs::write(
        &path,
        "user: admin\npasswd: secret\ncriteria:\n  min_days: 60\n  max_days: 80\n",
    )?;

    let err = load(&path).err();
    assert!(matches!(
        err,
        Some(ConfigError::MissingField {
            field: "criteria.min_ratio"
        })
    ));
    Ok(())
}
