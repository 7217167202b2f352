use crate::cli::ListParams;
use crate::error::SfxPrepError;
use std::io::Write;

pub fn write_asset_table(out: &mut impl Write, params: &ListParams) -> std::io::Result<()> {
    for asset in &params.assets {
        writeln!(
            out,
            "{} -> {}",
            asset.name,
            params.output_dir.join(&asset.name).display()
        )?;
        writeln!(out, "  {}", asset.description)?;
        for url in &asset.urls {
            writeln!(out, "  - {url}")?;
        }
    }
    Ok(())
}

pub fn run_list(params: ListParams) -> Result<(), SfxPrepError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_asset_table(&mut out, &params)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{builtin_assets, resolve_assets};
    use std::path::PathBuf;

    #[test]
    fn test_write_asset_table_lists_candidates_in_order() {
        let params = ListParams {
            assets: resolve_assets(&builtin_assets()).unwrap(),
            output_dir: PathBuf::from("public/sfx"),
        };
        let mut out = Vec::new();

        write_asset_table(&mut out, &params).unwrap();

        let text = String::from_utf8(out).unwrap();
        let spinning = text.find("spinning.mp3 -> public/sfx/spinning.mp3").unwrap();
        let drumroll = text.find("drumroll.mp3 -> public/sfx/drumroll.mp3").unwrap();
        assert!(spinning < drumroll);
        assert!(text.contains("  - https://assets.mixkit.co/sfx/download/mixkit-winning-chimes-2015.mp3"));
    }
}
