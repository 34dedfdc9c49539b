use std::path::Path;

pub fn execute(colormap_file: Option<&Path>) -> anyhow::Result<()> {
    let registry = super::registry(colormap_file)?;
    for name in registry.names() {
        let colormap = registry.resolve(&name)?;
        println!("{name:<16} {:>4} colors", colormap.len());
    }
    Ok(())
}
