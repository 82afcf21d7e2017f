/// Where user-facing progress and failure messages go.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);

    fn success(&self, message: &str) {
        self.info(message);
    }
}

/// Headless reporter: everything goes to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        println!("{}", message);
    }
}

/// Console output plus a desktop notification for the final outcome.
#[cfg(feature = "notify")]
pub struct NotifyReporter {
    console: ConsoleReporter,
    title: String,
}

#[cfg(feature = "notify")]
impl NotifyReporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            console: ConsoleReporter,
            title: title.into(),
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = crate::utils::send_notification(&self.title, message) {
            tracing::warn!("could not show notification: {}", e);
        }
    }
}

#[cfg(feature = "notify")]
impl Reporter for NotifyReporter {
    fn info(&self, message: &str) {
        self.console.info(message);
    }

    fn error(&self, message: &str) {
        self.console.error(message);
        self.notify(message);
    }

    fn success(&self, message: &str) {
        self.console.info(message);
        self.notify(message);
    }
}

/// Picks the notifying reporter when it is compiled in.
#[cfg(feature = "notify")]
pub fn default_reporter() -> Box<dyn Reporter> {
    Box::new(NotifyReporter::new("Bing Wallpaper"))
}

#[cfg(not(feature = "notify"))]
pub fn default_reporter() -> Box<dyn Reporter> {
    Box::new(ConsoleReporter)
}
