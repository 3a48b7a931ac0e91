/// Get a systemd credential (see <https://systemd.io/CREDENTIALS/>).
pub(crate) fn get_credential(name: &str) -> anyhow::Result<secrecy::SecretString> {
    use anyhow::Context;
    use libsystemd::credentials::CredentialsLoader;
    use std::io::{BufReader, Read};

    let loader = CredentialsLoader::open()?;
    let file = loader
        .get(name)
        .with_context(|| format!("no systemd credential named {name:?}"))?;
    let mut buffer = String::new();
    let mut reader = BufReader::new(file);
    reader.read_to_string(&mut buffer)?;
    Ok(secrecy::SecretString::new(buffer.trim_end().to_owned()))
}
