use crate::core::profile::Profile;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the profile as CSV with a `lambda,lambda0_line,lambda1_line,integrand` header.
pub fn write_profile<W: Write>(profile: &Profile, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in profile.points() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_profile_to_path(profile: &Profile, path: &Path) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_profile(profile, file)
}
