//! Export pipeline: rasterize once, encode every artifact, hand them to a sink.
//!
//! ```text
//! MapInfo + objects ──► rasterize ──► OccupancyGrid
//!                                        │
//!            ┌──────────────┬────────────┼──────────────┐
//!            ▼              ▼            ▼              ▼
//!      {name}.pgm     {name}.yaml  {name}_planner.npy  {name}_raw.npy
//!                                                      (optional)
//!            └──────────────┴─────┬──────┴──────────────┘
//!                                 ▼
//!                           ArtifactSink
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::grid::{OccupancyGrid, RasterStats, rasterize_with_stats};
use crate::scene::{MapInfo, MapObject, is_plain_file_name};

use super::npy::{encode_planner_npy, encode_raw_npy};
use super::pgm::encode_pgm;
use super::ros_yaml::encode_ros_yaml;

/// One named output file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Bare filename, no directory
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Create an artifact from a bare filename and its contents
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Destination for exported artifacts.
pub trait ArtifactSink {
    /// Store one artifact. Called once per artifact, in export order.
    fn deliver(&mut self, artifact: &Artifact) -> io::Result<()>;
}

/// Writes artifacts as files in a directory.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Use `dir`, creating it (and parents) if missing
    pub fn create(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory receiving the files
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    /// Write `artifact` as `dir/file_name`.
    ///
    /// Filenames that are not a single plain component (separators, `.`,
    /// `..`) are rejected with [`io::ErrorKind::InvalidInput`], so nothing is
    /// written outside `dir`.
    fn deliver(&mut self, artifact: &Artifact) -> io::Result<()> {
        if !is_plain_file_name(&artifact.file_name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "refusing to write {:?} outside {}",
                    artifact.file_name,
                    self.dir.display()
                ),
            ));
        }
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), artifact.bytes.len());
        Ok(())
    }
}

/// Keeps delivered artifacts in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts in delivery order
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Look up an artifact by filename
    pub fn get(&self, file_name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.file_name == file_name)
    }

    /// Consume the sink, returning the artifacts in delivery order
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn deliver(&mut self, artifact: &Artifact) -> io::Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

/// Result of one export run.
#[derive(Clone, Debug)]
pub struct MapExport {
    grid: OccupancyGrid,
    stats: RasterStats,
    artifacts: Vec<Artifact>,
}

impl MapExport {
    /// Rasterize the scene and encode every artifact.
    ///
    /// Nothing is written yet; see [`MapExport::deliver`].
    pub fn build(
        info: &MapInfo,
        objects: &[MapObject],
        config: &ExportConfig,
    ) -> Result<Self, ExportError> {
        let (grid, stats) = rasterize_with_stats(info, objects)?;

        let mut artifacts = vec![
            Artifact::new(format!("{}.pgm", info.name), encode_pgm(&grid)),
            Artifact::new(
                format!("{}.yaml", info.name),
                encode_ros_yaml(info).into_bytes(),
            ),
            Artifact::new(
                config.planner_file_name(&info.name),
                encode_planner_npy(&grid),
            ),
        ];
        if config.write_raw_array {
            artifacts.push(Artifact::new(
                format!("{}_raw.npy", info.name),
                encode_raw_npy(&grid),
            ));
        }

        Ok(Self {
            grid,
            stats,
            artifacts,
        })
    }

    /// The rasterized grid every artifact was encoded from
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// What rasterization did
    pub fn stats(&self) -> &RasterStats {
        &self.stats
    }

    /// Encoded artifacts in delivery order
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Hand every artifact to `sink`, stopping at the first failure.
    pub fn deliver(&self, sink: &mut dyn ArtifactSink) -> Result<(), ExportError> {
        for artifact in &self.artifacts {
            sink.deliver(artifact)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WorldPoint, cell};
    use crate::error::ValidationError;
    use crate::scene::{ObjectType, Shape};

    fn scene() -> (MapInfo, Vec<MapObject>) {
        let info = MapInfo::new("room", 2.0, 1.0, 0.5);
        let objects = vec![MapObject::new(
            "box",
            ObjectType::Obstacle,
            Shape::rectangle(WorldPoint::new(0.25, 0.25), 0.4, 0.4, 0.0),
        )];
        (info, objects)
    }

    fn names(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|a| a.file_name.as_str()).collect()
    }

    #[test]
    fn test_default_artifacts_in_order() {
        let (info, objects) = scene();
        let export = MapExport::build(&info, &objects, &ExportConfig::default()).unwrap();

        assert_eq!(
            names(export.artifacts()),
            vec!["room.pgm", "room.yaml", "room_planner.npy"]
        );
        assert_eq!(export.grid().width(), 4);
        assert_eq!(export.grid().height(), 2);
        assert_eq!(export.grid().cells()[0], cell::OCCUPIED);
        assert_eq!(export.stats().cells_marked, 1);
    }

    #[test]
    fn test_raw_array_enabled() {
        let (info, objects) = scene();
        let config = ExportConfig {
            write_raw_array: true,
            ..ExportConfig::default()
        };
        let export = MapExport::build(&info, &objects, &config).unwrap();

        assert_eq!(
            names(export.artifacts()),
            vec!["room.pgm", "room.yaml", "room_planner.npy", "room_raw.npy"]
        );
    }

    #[test]
    fn test_memory_sink_receives_everything() {
        let (info, objects) = scene();
        let export = MapExport::build(&info, &objects, &ExportConfig::default()).unwrap();

        let mut sink = MemorySink::new();
        export.deliver(&mut sink).unwrap();

        assert_eq!(sink.artifacts(), export.artifacts());
        let yaml = sink.get("room.yaml").unwrap();
        assert!(yaml.bytes.starts_with(b"image: room.pgm\n"));
    }

    #[test]
    fn test_invalid_map_produces_nothing() {
        let info = MapInfo::new("", 2.0, 1.0, 0.5);
        let result = MapExport::build(&info, &[], &ExportConfig::default());
        assert!(matches!(result, Err(ExportError::Validation(_))));
    }

    #[test]
    fn test_path_like_map_name_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let info = MapInfo::new("../escaped", 2.0, 1.0, 0.5);
        let result = MapExport::build(&info, &[], &ExportConfig::default());
        assert!(matches!(
            result,
            Err(ExportError::Validation(ValidationError::InvalidName(_)))
        ));
        assert!(!tmp.path().join("escaped.pgm").exists());
    }

    #[test]
    fn test_directory_sink_stays_inside_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::create(tmp.path().join("out")).unwrap();

        for name in ["../escaped.pgm", "sub/x.pgm", ".."] {
            let err = sink.deliver(&Artifact::new(name, vec![1, 2, 3])).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{}", name);
        }
        assert!(!tmp.path().join("escaped.pgm").exists());

        sink.deliver(&Artifact::new("ok.pgm", vec![1, 2, 3])).unwrap();
        let written = fs::read(tmp.path().join("out").join("ok.pgm")).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[test]
    fn test_planner_suffix_with_separator_is_not_written() {
        let tmp = tempfile::tempdir().unwrap();
        let (info, objects) = scene();
        let config = ExportConfig {
            planner_suffix: "/../../planner".to_string(),
            ..ExportConfig::default()
        };
        let export = MapExport::build(&info, &objects, &config).unwrap();
        let mut sink = DirectorySink::create(tmp.path().join("out")).unwrap();

        assert!(matches!(export.deliver(&mut sink), Err(ExportError::Io(_))));
        assert!(!tmp.path().join("planner.npy").exists());
    }

    struct FailingSink {
        calls: usize,
    }

    impl ArtifactSink for FailingSink {
        fn deliver(&mut self, _artifact: &Artifact) -> io::Result<()> {
            self.calls += 1;
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_delivery_stops_at_first_error() {
        let (info, objects) = scene();
        let export = MapExport::build(&info, &objects, &ExportConfig::default()).unwrap();

        let mut sink = FailingSink { calls: 0 };
        assert!(matches!(export.deliver(&mut sink), Err(ExportError::Io(_))));
        assert_eq!(sink.calls, 1);
    }
}
