//! Snapshot asset preloading.
//!
//! All thumbnails are requested at once and joined; drawing starts only
//! after every request has settled, successfully or not.

use std::collections::{BTreeSet, HashMap};

use futures::future::{join_all, LocalBoxFuture};

use super::layout::SnapshotPlan;
use crate::config::SnapshotStyle;
use crate::domain::AssetError;

/// Fetches one image asset
pub trait AssetLoader {
    type Image;

    fn load(&self, src: &str) -> LocalBoxFuture<'static, Result<Self::Image, AssetError>>;
}

/// Settled preload batch
#[derive(Debug)]
pub struct LoadedAssets<I> {
    images: HashMap<String, I>,
    failures: Vec<AssetError>,
}

impl<I> Default for LoadedAssets<I> {
    fn default() -> Self {
        Self {
            images: HashMap::new(),
            failures: Vec::new(),
        }
    }
}

impl<I> LoadedAssets<I> {
    pub fn get(&self, src: &str) -> Option<&I> {
        self.images.get(src)
    }

    pub fn loaded(&self) -> usize {
        self.images.len()
    }

    pub fn failures(&self) -> &[AssetError] {
        &self.failures
    }
}

/// Load every distinct thumbnail the plan needs.
///
/// Text-style plans need no images and resolve immediately.
pub async fn preload<L: AssetLoader>(loader: &L, plan: &SnapshotPlan) -> LoadedAssets<L::Image> {
    if plan.style == SnapshotStyle::Text {
        return LoadedAssets::default();
    }

    let sources: BTreeSet<&str> = plan
        .cells()
        .map(|cell| cell.image_ref.as_str())
        .filter(|src| !src.is_empty())
        .collect();

    let pending = sources.iter().map(|src| {
        let fut = loader.load(src);
        async move { (*src, fut.await) }
    });

    let mut assets = LoadedAssets::default();
    for (src, result) in join_all(pending).await {
        match result {
            Ok(image) => {
                assets.images.insert(src.to_string(), image);
            }
            Err(e) => {
                log::warn!("{}", e);
                assets.failures.push(e);
            }
        }
    }
    log::info!(
        "snapshot assets settled: {} loaded, {} failed",
        assets.loaded(),
        assets.failures.len()
    );
    assets
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::RefCell;

    /// Loader that fails for any src listed in `broken` and records requests
    #[derive(Default)]
    pub struct ScriptedLoader {
        pub broken: Vec<String>,
        pub requested: RefCell<Vec<String>>,
    }

    impl AssetLoader for ScriptedLoader {
        type Image = String;

        fn load(&self, src: &str) -> LocalBoxFuture<'static, Result<String, AssetError>> {
            self.requested.borrow_mut().push(src.to_string());
            let src = src.to_string();
            let fails = self.broken.contains(&src);
            Box::pin(async move {
                if fails {
                    Err(AssetError { src, reason: "404".to_string() })
                } else {
                    Ok(format!("image:{src}"))
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::ScriptedLoader;
    use super::*;
    use crate::config::SnapshotConfig;
    use crate::domain::{Catalog, Category, Item};
    use crate::filter::board;
    use crate::progress::Progress;
    use futures::executor::block_on;

    fn plan(style: SnapshotStyle) -> SnapshotPlan {
        let catalog = Catalog::new(vec![
            Item::new("Joker", Category::Common, "", "img/joker.png"),
            Item::new("Odd Todd", Category::Common, "", "img/odd_todd.png"),
            Item::new("No Art", Category::Common, "", ""),
        ])
        .unwrap();
        let config = SnapshotConfig { style, ..SnapshotConfig::default() };
        SnapshotPlan::build(&board(&catalog, &BTreeSet::new()), Progress::new(0, 3), &config)
    }

    #[test]
    fn test_preload_settles_every_request() {
        let loader = ScriptedLoader {
            broken: vec!["img/odd_todd.png".to_string()],
            ..Default::default()
        };
        let assets = block_on(preload(&loader, &plan(SnapshotStyle::Thumbnails)));

        assert_eq!(loader.requested.borrow().len(), 2);
        assert_eq!(assets.get("img/joker.png").map(String::as_str), Some("image:img/joker.png"));
        assert!(assets.get("img/odd_todd.png").is_none());
        assert_eq!(assets.failures().len(), 1);
        assert_eq!(assets.failures()[0].src, "img/odd_todd.png");
    }

    #[test]
    fn test_text_style_skips_loading() {
        let loader = ScriptedLoader::default();
        let assets = block_on(preload(&loader, &plan(SnapshotStyle::Text)));
        assert!(loader.requested.borrow().is_empty());
        assert_eq!(assets.loaded(), 0);
    }
}
