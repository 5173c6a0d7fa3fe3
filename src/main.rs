mod cli;

use cli::{Args, Command, ReportOptions};
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use thirdparty_licenses::adapters::outbound::console::StderrProgressReporter;
use thirdparty_licenses::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use thirdparty_licenses::adapters::outbound::formatters::HtmlFragmentFormatter;
use thirdparty_licenses::adapters::outbound::network::{
    authorization_credentials, authorization_headers, Fetcher, GitHubClient, GopkgResolver,
    LicenseTextResolver, NpmsClient, ReqwestTransport, ResponseCache,
};
use thirdparty_licenses::application::dto::{ReportRequest, ReportResponse, SubstitutionRequest};
use thirdparty_licenses::application::factories::{PresenterFactory, PresenterType};
use thirdparty_licenses::application::use_cases::{
    GenerateModuleReportUseCase, GeneratePackageReportUseCase, SubstitutePlaceholderUseCase,
};
use thirdparty_licenses::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use thirdparty_licenses::license_report::services::OwnPackageFilter;
use thirdparty_licenses::ports::outbound::ReportFormatter;
use thirdparty_licenses::shared::error::{ExitCode, LicenseReportError};
use thirdparty_licenses::shared::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

type ModuleReport =
    GenerateModuleReportUseCase<FileSystemReader, ReqwestTransport, StderrProgressReporter>;
type PackageReport =
    GeneratePackageReportUseCase<FileSystemReader, ReqwestTransport, StderrProgressReporter>;

fn main() {
    // clap reports usage errors itself and exits with code 2
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Modules { path, report } => {
            let wiring = Wiring::new(config, &report)?;
            let mut cache = ResponseCache::new();
            let response = wiring
                .module_report()?
                .execute(&ReportRequest::new(path), &mut cache)?;
            present(&report, &[response])
        }
        Command::Packages { path, report } => {
            let wiring = Wiring::new(config, &report)?;
            let mut cache = ResponseCache::new();
            let response = wiring
                .package_report()
                .execute(&ReportRequest::new(path), &mut cache)?;
            present(&report, &[response])
        }
        Command::All { root, report } => {
            validate_project_path(&root)?;
            let wiring = Wiring::new(config, &report)?;

            // One cache for both flows: accounts and templates are shared
            let mut cache = ResponseCache::new();
            let modules = wiring
                .module_report()?
                .execute(&ReportRequest::new(root.join("core")), &mut cache)?;
            let packages = wiring
                .package_report()
                .execute(&ReportRequest::new(root.join("ui")), &mut cache)?;
            info!(cached_responses = cache.len(), "Combined report finished");
            present(&report, &[modules, packages])
        }
        Command::Substitute {
            input,
            output,
            placeholder,
        } => {
            let use_case = SubstitutePlaceholderUseCase::new(FileSystemWriter::new(output.clone()));
            let request = SubstitutionRequest::new(input, output, placeholder);
            let replaced = use_case.execute(&request)?;
            eprintln!(
                "🔁 Replaced {} occurrence(s) of '{}' in {}",
                replaced,
                request.placeholder,
                request.template_path.display()
            );
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => discover_config(Path::new(".")),
    }
}

/// Adapters shared by the report flows of one invocation
struct Wiring {
    settings: Settings,
    transport: ReqwestTransport,
    github: GitHubClient,
}

impl Wiring {
    fn new(config: Option<ConfigFile>, report: &ReportOptions) -> Result<Self> {
        let settings = Settings::resolve(config, report.own_prefix.clone(), report.year.clone());

        // Credentials are read once per run
        let (user, token) = authorization_credentials();
        let github = GitHubClient::new(authorization_headers(user.as_deref(), token.as_deref()));
        if !github.is_authenticated() {
            info!("GH_API_USER/GH_API_TOKEN not set, using unauthenticated GitHub requests");
        }

        Ok(Self {
            settings,
            transport: ReqwestTransport::new()?,
            github,
        })
    }

    fn fetcher(&self) -> Fetcher<ReqwestTransport> {
        Fetcher::new(self.transport.clone(), self.settings.retry_policy())
    }

    fn module_report(&self) -> Result<ModuleReport> {
        Ok(GenerateModuleReportUseCase::new(
            FileSystemReader::new(),
            self.fetcher(),
            self.github.clone(),
            GopkgResolver::new()?,
            StderrProgressReporter::new(),
        ))
    }

    fn package_report(&self) -> PackageReport {
        GeneratePackageReportUseCase::new(
            FileSystemReader::new(),
            self.fetcher(),
            NpmsClient::new(&self.settings.user_agent),
            self.github.clone(),
            LicenseTextResolver::new(
                self.github.clone(),
                self.settings.bsd_overrides.clone(),
                self.settings.template_year.clone(),
                &self.settings.user_agent,
            ),
            OwnPackageFilter::new(self.settings.own_package_prefix.clone()),
            StderrProgressReporter::new(),
        )
    }
}

fn present(report: &ReportOptions, responses: &[ReportResponse]) -> Result<()> {
    let formatter = HtmlFragmentFormatter::new();
    let mut output = String::new();
    for response in responses {
        output.push_str(&formatter.format(&response.entries)?);
    }

    let presenter = PresenterFactory::create(PresenterType::from_output(report.output.clone()));
    presenter.present(&output)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LicenseReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| LicenseReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(LicenseReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(LicenseReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
