use super::*;
use crate::POLICY_FILE;
use crate::Result;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// where policy state lives inside a clustering output directory
pub fn path(dir: &Path) -> PathBuf {
    dir.join(POLICY_FILE)
}

/// indicates whether a prior run left policy state in `dir`
pub fn done(dir: &Path) -> bool {
    path(dir).exists()
}

/// persist policy state alongside the cluster models in `dir`
pub fn save<P: Codec>(dir: &Path, policy: &P) -> Result<()> {
    log::info!("{:<32}{:<32}", "saving policy", path(dir).display());
    std::fs::create_dir_all(dir)?;
    let ref mut file = BufWriter::new(File::create(path(dir))?);
    file.write_all(&policy.to_bytes()?)?;
    file.flush()?;
    Ok(())
}

/// read policy state written by [`save`]
pub fn load<P: Codec>(dir: &Path) -> Result<P> {
    log::info!("{:<32}{:<32}", "loading policy", path(dir).display());
    let mut bytes = Vec::new();
    BufReader::new(File::open(path(dir))?).read_to_end(&mut bytes)?;
    P::from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canopy;
    use crate::ClusterError;
    use crate::Policies;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kluster-{}-{}", name, std::process::id()))
    }

    #[test]
    fn persistence() {
        let ref dir = scratch("storage");
        let save = Policies::from(Canopy::new(5., 1.).unwrap());
        super::save(dir, &save).unwrap();
        assert!(done(dir));
        let load = super::load::<Policies>(dir).unwrap();
        assert_eq!(load, save);
        std::fs::remove_dir_all(dir).unwrap();
    }
    #[test]
    fn missing_state_is_io_error() {
        let ref dir = scratch("missing");
        assert!(!done(dir));
        assert!(matches!(
            super::load::<Policies>(dir),
            Err(ClusterError::Io(_))
        ));
    }
}
