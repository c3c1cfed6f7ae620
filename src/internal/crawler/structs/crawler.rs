//! 目录树爬虫
//!
//! 两种工作方式：
//!
//! - **recurse**：镜像整棵树。每个目录先在本地建好同名目录再下钻，每个非旧版本文件都直接拉取，
//!   不看过期标记也不限数量。列表或拉取失败时原样返回，已经完成的兄弟节点不受影响。
//! - **request**：只处理一层目录。按 [`RequestMode`] 收集目录，或者选文件并可选地拉取；
//!   不会自己递归，需要的话由调用方对子目录再次调用。
//!
//! 整个过程是顺序的：每个列表请求、每次拉取都等上一步完成后才开始。

use std::path::PathBuf;

use chrono::{TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::internal::entrance::local::{ensure_local_dir, resolve_local_base};
use crate::internal::fetcher::traits::blob_fetcher::BlobFetcher;
use crate::internal::listing::enums::EntryKind;
use crate::internal::listing::traits::directory_provider::DirectoryProvider;
use crate::internal::selector::directory_selector::select_directories;
use crate::internal::selector::file_selector::{FileScan, download_bucket, select_files};
use crate::internal::selector::paths::{
    child_directory, join_remote, local_sink, strip_remote_root,
};
use crate::internal::selector::structs::{
    SelectError, Selection, StalenessPolicy, TraversalState,
};
use crate::internal::selector::version_filter::is_versioned;

use super::crawl_error::CrawlError;
use super::mirror_report::{MirrorReport, SkippedDirectory};
use super::request_mode::RequestMode;

/// 默认过期窗口（天）
pub const DEFAULT_RETENTION_DAYS: i64 = 1;

#[derive(Debug, Clone)]
pub struct Crawler<P, F> {
    provider: P,
    fetcher: F,
    local_base: PathBuf,
    retention: TimeDelta,
}

impl<P, F> Crawler<P, F>
where
    P: DirectoryProvider,
    F: BlobFetcher,
{
    pub fn new(provider: P, fetcher: F, local_base: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            fetcher,
            local_base: local_base.into(),
            retention: TimeDelta::days(DEFAULT_RETENTION_DAYS),
        }
    }

    /// 设置过期窗口，默认一天。
    pub fn with_retention(mut self, retention: TimeDelta) -> Self {
        self.retention = retention;
        self
    }

    pub fn local_base(&self) -> &std::path::Path {
        &self.local_base
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// 镜像 `path` 下的整棵树。
    pub async fn recurse(&self, path: &str) -> Result<MirrorReport, CrawlError> {
        let mut report = MirrorReport::default();
        self.recurse_into(path, &mut report).await?;
        Ok(report)
    }

    async fn recurse_into(
        &self,
        path: &str,
        report: &mut MirrorReport,
    ) -> Result<(), CrawlError> {
        let entries = self.provider.list(path).await?;

        for entry in entries {
            match entry.kind {
                EntryKind::Directory => {
                    let dir = child_directory(path, &entry.name);
                    // 本地目录只按名字建在根目录下，不随远程层级嵌套
                    let Some(local_dir) = local_sink(&self.local_base, &entry.name) else {
                        warn!(remote = %dir, "skipping directory, name escapes local base");
                        report.skipped_directories.push(SkippedDirectory {
                            local_path: self.local_base.join(&entry.name),
                            reason: SelectError::UnsafeLocalPath {
                                remote_path: dir.clone(),
                            }
                            .to_string(),
                            remote_path: dir,
                        });
                        continue;
                    };

                    if let Err(e) = ensure_local_dir(&local_dir).await {
                        warn!(
                            remote = %dir,
                            local = %local_dir.display(),
                            error = %e,
                            "skipping directory, local directory unavailable"
                        );
                        report.skipped_directories.push(SkippedDirectory {
                            remote_path: dir,
                            local_path: local_dir,
                            reason: e.to_string(),
                        });
                        continue;
                    }

                    info!("Scanning Directory {dir}");
                    Box::pin(self.recurse_into(&dir, report)).await?;
                }
                EntryKind::RegularFile if is_versioned(&entry.name) => {
                    report.versioned_ignored += 1;
                }
                EntryKind::RegularFile => {
                    let remote_path = join_remote(path, &entry.name);
                    let file = strip_remote_root(&remote_path);
                    let sink = local_sink(&self.local_base, file).ok_or_else(|| {
                        SelectError::UnsafeLocalPath {
                            remote_path: remote_path.clone(),
                        }
                    })?;

                    info!("retrieving file {file}");
                    self.fetcher.fetch(&remote_path, &sink).await?;
                    report.fetched.push(sink);
                }
                EntryKind::Other => {
                    debug!(
                        name = %entry.name,
                        kind = entry.kind.as_str(),
                        "ignoring entry that is neither directory nor file"
                    );
                }
            }
        }

        Ok(())
    }

    /// 处理一层目录。
    ///
    /// 列表失败统一返回 [`CrawlError::Request`]；选择结果累加进 `state`。
    pub async fn request(
        &self,
        path: &str,
        mode: RequestMode,
        state: &mut TraversalState,
    ) -> Result<Selection, CrawlError> {
        let entries = self
            .provider
            .list(path)
            .await
            .map_err(|source| CrawlError::Request {
                path: path.to_string(),
                source,
            })?;

        let policy = StalenessPolicy::new(Utc::now(), self.retention);

        match mode {
            RequestMode::Directories => {
                let directories = select_directories(&entries, &policy, state)?;
                Ok(Selection::Directories(directories))
            }
            RequestMode::Files { count, download } => {
                let resolved_base = resolve_local_base(&self.local_base)
                    .await
                    .map_err(|source| CrawlError::LocalBase {
                        path: self.local_base.clone(),
                        source,
                    })?;

                let scan = FileScan {
                    path,
                    count,
                    resolved_base: &resolved_base,
                };
                let folder = select_files(&entries, scan, &policy, state)?;

                let entries = state.folder(&folder).cloned().unwrap_or_default();

                let fetched = if download {
                    download_bucket(&self.fetcher, &entries).await?
                } else {
                    Vec::new()
                };

                Ok(Selection::Files {
                    folder,
                    entries,
                    fetched,
                })
            }
        }
    }
}
