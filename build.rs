use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

/// Writes the generated `app_metadata.rs` consumed by `libs::secret`.
struct MetadataWriter {
    file: File,
}

impl MetadataWriter {
    fn create() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
        let file = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;
        Ok(Self { file })
    }

    fn constant(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.file, "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};", key.to_uppercase(), value)
    }

    fn bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let list = value.iter().map(|byte| byte.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
            key.to_uppercase(),
            value.len(),
            list
        )
    }
}

/// Pads or truncates `seed` to exactly `len` bytes.
fn fixed_len(seed: String, len: usize) -> Vec<u8> {
    let mut bytes = seed.into_bytes();
    bytes.resize(len, b'!');
    bytes
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_KEY");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_IV");

    let _ = dotenv();

    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "jirat".to_string());
    let mut metadata = MetadataWriter::create()?;
    metadata.constant("NAME", &package_name)?;
    metadata.constant("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let manifest = fs::read_to_string("Cargo.toml")?;
    let manifest: Value = toml::from_str(&manifest).map_err(io::Error::other)?;
    if let Some(table) = manifest
        .get("package")
        .and_then(|pkg| pkg.get("metadata"))
        .and_then(|meta| meta.as_table())
    {
        for (key, value) in table {
            if let Some(value) = value.as_str() {
                metadata.constant(key, value)?;
            }
        }
    }

    let (key, iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != 32 {
                panic!("ENCRYPTION_KEY must be exactly 32 bytes long, got {} bytes", key.len());
            }
            if iv.len() != 16 {
                panic!("ENCRYPTION_IV must be exactly 16 bytes long, got {} bytes", iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not set, using package-derived defaults.");
            println!("cargo:warning=Add both to a .env file for production builds.");
            (
                fixed_len(format!("{}_default_encryption_key_32b", package_name), 32),
                fixed_len(format!("{}_iv_16b", package_name), 16),
            )
        }
    };

    metadata.bytes("ENCRYPTION_KEY", &key)?;
    metadata.bytes("ENCRYPTION_IV", &iv)?;

    Ok(())
}
