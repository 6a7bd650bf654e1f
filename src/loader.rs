//! HTML fragment loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships with placeholder navbar/footer elements and an empty
//! projects container. At startup the three fragments are fetched
//! concurrently and each one is spliced in as soon as its own response
//! arrives. Splicing destroys the listeners bound to the old subtree, so the
//! host rebinds handlers on the new subtree as part of every splice.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch or splice is logged and recorded in the [`LoadReport`];
//! that region keeps its placeholder and the other fragments are unaffected.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::future::Future;

use futures::StreamExt;
use futures::stream::FuturesUnordered;

use crate::config::FragmentPaths;
use crate::consts;
use crate::error::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    Navbar,
    Projects,
    Footer,
}

/// Where a fragment lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Replace the matching element with the fragment's root element.
    Replace(&'static str),
    /// Set the matching element's contents to the fragment markup.
    Fill(&'static str),
}

impl Fragment {
    pub const ALL: [Self; 3] = [Self::Navbar, Self::Projects, Self::Footer];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Projects => "projects",
            Self::Footer => "footer",
        }
    }

    #[must_use]
    pub fn path(self, paths: &FragmentPaths) -> &str {
        match self {
            Self::Navbar => &paths.navbar,
            Self::Projects => &paths.projects,
            Self::Footer => &paths.footer,
        }
    }

    #[must_use]
    pub fn placement(self) -> Placement {
        match self {
            Self::Navbar => Placement::Replace(consts::NAVBAR_SELECTOR),
            Self::Projects => Placement::Fill(consts::PROJECTS_CONTAINER_SELECTOR),
            Self::Footer => Placement::Replace(consts::FOOTER_SELECTOR),
        }
    }
}

/// Fetches fragment markup by path.
pub trait FragmentSource {
    /// Response body for `path`.
    ///
    /// # Errors
    ///
    /// [`FolioError::Fetch`] when no response arrived, or
    /// [`FolioError::HttpStatus`] for a non-success status.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FolioError>>;
}

/// Places fetched markup into the document and rebinds its handlers.
pub trait FragmentHost {
    /// Splice `html` for `fragment`.
    ///
    /// # Errors
    ///
    /// [`FolioError::MissingPlaceholder`] when the target element is absent,
    /// [`FolioError::EmptyFragment`] when the markup has no root element.
    fn splice(&mut self, fragment: Fragment, html: &str) -> Result<(), FolioError>;
}

/// Outcome of [`load_all`], in completion order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<Fragment>,
    pub failed: Vec<(Fragment, FolioError)>,
}

impl LoadReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch every fragment concurrently and splice each as it completes.
pub async fn load_all<S, H>(source: &S, host: &mut H, paths: &FragmentPaths) -> LoadReport
where
    S: FragmentSource,
    H: FragmentHost,
{
    let mut pending: FuturesUnordered<_> = Fragment::ALL
        .into_iter()
        .map(|fragment| {
            let path = fragment.path(paths).to_owned();
            async move {
                let result = source.fetch(&path).await;
                (fragment, result)
            }
        })
        .collect();

    let mut report = LoadReport::default();
    while let Some((fragment, fetched)) = pending.next().await {
        match fetched.and_then(|html| host.splice(fragment, &html)) {
            Ok(()) => {
                log::info!("{} fragment loaded", fragment.name());
                report.loaded.push(fragment);
            }
            Err(err) => {
                log::error!("{} fragment failed: {err}", fragment.name());
                report.failed.push((fragment, err));
            }
        }
    }
    report
}

#[cfg(feature = "hydrate")]
pub use browser::{DomHost, HttpFragmentSource};

#[cfg(feature = "hydrate")]
mod browser {
    use std::future::Future;

    use web_sys::Element;

    use super::{Fragment, FragmentHost, FragmentSource, Placement};
    use crate::dom;
    use crate::error::FolioError;

    /// Same-origin `GET` via `gloo-net`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct HttpFragmentSource;

    impl FragmentSource for HttpFragmentSource {
        fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FolioError>> {
            let path = path.to_owned();
            async move {
                let resp = gloo_net::http::Request::get(&path)
                    .send()
                    .await
                    .map_err(|err| FolioError::Fetch { path: path.clone(), message: err.to_string() })?;
                let status = resp.status();
                if !(200..300).contains(&status) {
                    return Err(FolioError::HttpStatus { path, status });
                }
                resp.text().await.map_err(|err| FolioError::Fetch { path, message: err.to_string() })
            }
        }
    }

    /// Splices into the live document, then hands the new subtree to `rebind`.
    pub struct DomHost<F>
    where
        F: FnMut(Fragment, &Element),
    {
        rebind: F,
    }

    impl<F> DomHost<F>
    where
        F: FnMut(Fragment, &Element),
    {
        pub fn new(rebind: F) -> Self {
            Self { rebind }
        }
    }

    impl<F> FragmentHost for DomHost<F>
    where
        F: FnMut(Fragment, &Element),
    {
        fn splice(&mut self, fragment: Fragment, html: &str) -> Result<(), FolioError> {
            let root = match fragment.placement() {
                Placement::Replace(selector) => {
                    let existing = dom::query(selector).ok_or(FolioError::MissingPlaceholder { selector })?;
                    let document = dom::document().ok_or_else(|| FolioError::Dom("no document".to_owned()))?;
                    let scratch = document.create_element("div")?;
                    scratch.set_inner_html(html);
                    let replacement = scratch
                        .first_element_child()
                        .ok_or_else(|| FolioError::EmptyFragment { path: fragment.name().to_owned() })?;
                    existing.replace_with_with_node_1(&replacement)?;
                    replacement
                }
                Placement::Fill(selector) => {
                    let container = dom::query(selector).ok_or(FolioError::MissingPlaceholder { selector })?;
                    container.set_inner_html(html);
                    dom::set_style(&container, "display", "block");
                    dom::set_style(&container, "visibility", "visible");
                    container
                }
            };
            (self.rebind)(fragment, &root);
            Ok(())
        }
    }
}
