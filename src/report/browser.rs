use crate::report::Browser;

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open_url(&mut self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}
