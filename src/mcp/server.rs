//! MCP Server implementation for EduConnect.
//!
//! Exposes program search, listing and simulated enrollment as MCP tools,
//! and serves the enrollment widget as an MCP resource.

use anyhow::Result;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    Annotated, CallToolResult, Content, Implementation, ListResourcesResult, Meta,
    PaginatedRequestParam, ProtocolVersion, RawResource, ReadResourceRequestParam,
    ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use serde::Serialize;

use super::tools::*;
use crate::enrollment::EnrollmentOutcome;
use crate::search::FilterCriteria;
use crate::service::ProgramService;
use crate::summary;

/// URI of the enrollment widget resource
pub const WIDGET_URI: &str = "ui://enrollment/enrollment-app.html";
/// MIME type hosts use to recognize an MCP app widget
pub const WIDGET_MIME_TYPE: &str = "text/html;profile=mcp-app";

/// `_meta` pointing hosts at the widget that renders tool results
fn widget_meta() -> Meta {
    let mut meta = Meta::new();
    meta.insert(
        "ui".to_string(),
        serde_json::json!({ "resourceUri": WIDGET_URI }),
    );
    meta
}

/// MCP Server for the program catalog
#[derive(Clone)]
pub struct EduConnectMcpServer {
    service: ProgramService,
    tool_router: ToolRouter<Self>,
}

impl EduConnectMcpServer {
    pub fn new(service: ProgramService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Text summary for the model plus structured content for the widget
    fn tool_result(summary: String, structured: &impl Serialize) -> Result<CallToolResult, McpError> {
        let value = serde_json::to_value(structured)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let mut result = Self::text_result(summary);
        result.structured_content = Some(value);
        Ok(result)
    }

    fn text_result(text: String) -> CallToolResult {
        let mut result = CallToolResult::success(vec![Content::text(text)]);
        result.meta = Some(widget_meta());
        result
    }
}

#[tool_router]
impl EduConnectMcpServer {
    /// Free-text program search
    #[tool(description = "Search for educational programs by describing your background or interests in English (e.g. 'software engineer', 'cyber security', 'health'). Returns matching educational programs.", meta = widget_meta())]
    async fn search_programs(
        &self,
        Parameters(req): Parameters<SearchProgramsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let programs = self.service.search(&req.query, self.service.result_limit());

        tracing::info!(query = %req.query, results = programs.len(), "search_programs");

        let summary = summary::search_summary(&req.query, &programs);
        Self::tool_result(
            summary,
            &ProgramsContent {
                programs,
                action: ACTION_SEARCH_RESULTS,
                query: Some(&req.query),
            },
        )
    }

    /// Structured program listing
    #[tool(description = "List and filter educational programs. Filter by type (academic_degree or nanodegree), organization name, or maximum price.", meta = widget_meta())]
    async fn list_programs(
        &self,
        Parameters(req): Parameters<ListProgramsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let criteria = FilterCriteria::from(req);
        let programs = self.service.list(&criteria, self.service.result_limit());

        tracing::info!(criteria = ?criteria, results = programs.len(), "list_programs");

        let summary = summary::list_summary(&criteria, programs.len());
        Self::tool_result(
            summary,
            &ProgramsContent {
                programs,
                action: ACTION_LIST_RESULTS,
                query: None,
            },
        )
    }

    /// Simulated enrollment
    #[tool(description = "Simulate enrollment in a specific program by its ID.", meta = widget_meta())]
    async fn enroll_in_program(
        &self,
        Parameters(req): Parameters<EnrollRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.service.enroll(req.program_id);
        let message = summary::enrollment_message(&outcome);

        match outcome {
            EnrollmentOutcome::Enrolled(program) => Self::tool_result(
                message,
                &EnrollmentContent {
                    program,
                    action: ACTION_ENROLLMENT_SUCCESS,
                },
            ),
            EnrollmentOutcome::NotFound(_) => Ok(Self::text_result(message)),
        }
    }
}

#[tool_handler]
impl ServerHandler for EduConnectMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "educonnect-enrollment".to_string(),
                title: Some("EduConnect Enrollment".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "EduConnect lists Arabic-language educational programs (nanodegrees and academic diplomas). \
                Use search_programs with English keywords about the user's background or interests, \
                list_programs to filter by type, organization or maximum price, and enroll_in_program \
                to simulate enrollment. Results render in the widget at {WIDGET_URI}."
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let mut widget = RawResource::new(WIDGET_URI, "enrollment-app");
        widget.description = Some("Program cards and enrollment confirmation widget".to_string());
        widget.mime_type = Some(WIDGET_MIME_TYPE.to_string());

        Ok(ListResourcesResult {
            meta: None,
            resources: vec![Annotated::new(widget, None)],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        if request.uri == WIDGET_URI {
            let mut contents = ResourceContents::text(self.service.widget_html(), &request.uri);
            if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
                *mime_type = Some(WIDGET_MIME_TYPE.to_string());
            }

            Ok(ReadResourceResult {
                contents: vec![contents],
            })
        } else {
            Err(McpError::resource_not_found(
                format!("Unknown resource: {}", request.uri),
                None,
            ))
        }
    }
}

/// Run the MCP server on stdio transport
pub async fn run_server(service: ProgramService) -> Result<()> {
    use rmcp::transport::stdio;
    use rmcp::ServiceExt;

    let server = EduConnectMcpServer::new(service);
    tracing::info!("EduConnect MCP server running on stdio");

    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
