use crate::dom::{HtmlTree, MarkupTree};
use crate::error::{MirrorError, Result};
use crate::naming;
use crate::origin;
use reqwest::Client;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

/// Element/attribute pairs scanned for resource references.
const RESOURCE_ATTRS: [(&str, &str); 3] = [("img", "src"), ("link", "href"), ("script", "src")];

/// One local resource reference scheduled for download.
struct PlannedAsset<H> {
    handle: H,
    attr: &'static str,
    url: Url,
    file_name: String,
}

pub struct PageMirror {
    client: Client,
}

impl PageMirror {
    pub fn new() -> Self {
        Self::with_timeout(30)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Pagemirror/0.1 (https://github.com/trapdoorsec/pagemirror)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Mirror a single page into `output_dir`.
    ///
    /// Fetches the page, downloads its same-origin images, stylesheets and
    /// scripts into a `<page>_files` directory next to the page file, and
    /// rewrites the markup to reference the local copies. Asset downloads
    /// are best effort: a failed resource keeps its original remote URL and
    /// the run continues. Only a failed page fetch, an invalid output
    /// directory or a failed page write abort the operation.
    ///
    /// Returns the absolute path of the written page file.
    pub async fn mirror(&self, page_url: &str, output_dir: &Path) -> Result<PathBuf> {
        let page_url = Url::parse(page_url)?;
        let output_dir = validate_output_dir(output_dir).await?;

        info!("Mirroring {} into {}", page_url, output_dir.display());

        let body = self.fetch_page(&page_url).await?;
        let mut document = HtmlTree::parse(&body);

        let plans = plan_assets(&document, &page_url);
        let asset_dir_name = naming::asset_dir_name(page_url.as_str());
        let asset_dir = output_dir.join(&asset_dir_name);

        // The asset directory is created lazily: pages without local
        // resources leave no directory behind.
        if !plans.is_empty()
            && let Err(e) = tokio::fs::create_dir_all(&asset_dir).await
        {
            // Every download below will then fail against the missing
            // directory and be skipped one by one.
            warn!(
                "Could not create asset directory {}: {}",
                asset_dir.display(),
                e
            );
        }

        let total = plans.len();
        let mut saved = 0usize;
        for plan in plans {
            let target = asset_dir.join(&plan.file_name);
            match self.download_resource(&plan.url, &target).await {
                Ok(()) => {
                    let local = format!("{}/{}", asset_dir_name, plan.file_name);
                    document.set_attr(plan.handle, plan.attr, &local);
                    saved += 1;
                }
                Err(e) => {
                    warn!("Skipping resource {}: {}", plan.url, e);
                }
            }
        }

        let page_path = output_dir.join(naming::page_file_name(page_url.as_str()));
        // Untouched pages pass the response body through byte for byte;
        // rewritten pages are re-serialized from the tree.
        let markup = if saved > 0 { document.to_html() } else { body };
        tokio::fs::write(&page_path, markup.as_bytes())
            .await
            .map_err(|source| MirrorError::PageWrite {
                path: page_path.clone(),
                source,
            })?;

        info!(
            "Saved {} ({} of {} local resources)",
            page_path.display(),
            saved,
            total
        );
        Ok(page_path)
    }

    async fn fetch_page(&self, page_url: &Url) -> Result<String> {
        debug!("Fetching page {}", page_url);
        let response = self.client.get(page_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::BadStatus {
                url: page_url.to_string(),
                status,
            });
        }
        Ok(response.text().await?)
    }

    async fn download_resource(&self, url: &Url, target: &Path) -> Result<()> {
        debug!("Fetching resource {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::BadStatus {
                url: url.to_string(),
                status,
            });
        }
        let bytes = response.bytes().await?;
        tokio::fs::write(target, &bytes)
            .await
            .map_err(|source| MirrorError::ResourceWrite {
                path: target.to_path_buf(),
                source,
            })?;
        debug!("Saved resource {} to {}", url, target.display());
        Ok(())
    }
}

impl Default for PageMirror {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the output directory to an absolute path, failing fast before any
/// network activity when it is missing, inaccessible or not a directory.
async fn validate_output_dir(path: &Path) -> Result<PathBuf> {
    let canonical = match tokio::fs::canonicalize(path).await {
        Ok(canonical) => canonical,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(MirrorError::OutputDirDenied(path.to_path_buf()));
        }
        Err(_) => {
            return Err(MirrorError::OutputDirNotFound(path.to_path_buf()));
        }
    };

    let metadata = tokio::fs::metadata(&canonical)
        .await
        .map_err(|_| MirrorError::OutputDirNotFound(path.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(MirrorError::OutputNotADirectory(path.to_path_buf()));
    }

    Ok(canonical)
}

/// Scan the document for same-origin resource references.
///
/// Tag kinds are visited in a fixed order, elements in document order within
/// each kind. References are not deduplicated: two elements naming the same
/// URL schedule two downloads, and name collisions overwrite in scan order.
fn plan_assets<T: MarkupTree>(document: &T, page_url: &Url) -> Vec<PlannedAsset<T::Handle>> {
    let mut plans = Vec::new();

    for (tag, attr) in RESOURCE_ATTRS {
        for handle in document.find_all(tag) {
            let Some(value) = document.attr(handle, attr) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            let Ok(resolved) = page_url.join(&value) else {
                debug!("Ignoring unresolvable reference {:?}", value);
                continue;
            };
            if !origin::is_local(&value, page_url.as_str()) {
                debug!("Skipping external resource {}", resolved);
                continue;
            }

            plans.push(PlannedAsset {
                handle,
                attr,
                file_name: naming::resource_file_name(&resolved),
                url: resolved,
            });
        }
    }

    plans
}
