use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::DeviceResult;
use crate::device::core::pipeline::DevicePipeline;
use crate::device::core::registry::DeviceRegistry;
use crate::proxy::handlers::{ApiHandler, AppState};
use async_trait::async_trait;
use http::header;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use pingora_http::ResponseHeader;
use std::sync::Arc;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Terminal gateway: every request is answered locally, nothing is proxied.
///
/// Hook order inside `request_filter`:
///
/// 1. build `RequestCtx` from the session
/// 2. run `on_request` devices (a device may answer early)
/// 3. route to `ApiHandler`
/// 4. run `on_response` devices on whatever response was produced
/// 5. write the response and end the session
pub struct ExcuseGateway {
    handler: ApiHandler,
    devices: DeviceRegistry,
}

impl ExcuseGateway {
    pub fn new(state: Arc<AppState>, devices: DeviceRegistry) -> Self {
        Self {
            handler: ApiHandler::new(state),
            devices,
        }
    }

    /// Everything except the session I/O.
    pub async fn respond(&self, ctx: &mut RequestCtx) -> ResponseCtx {
        let mut resp = match DevicePipeline::run_on_request(self.devices.all(), ctx) {
            DeviceResult::Continue => self.handler.handle(ctx).await,
            DeviceResult::Respond(resp) => resp,
        };

        DevicePipeline::run_on_response(self.devices.all(), ctx, &mut resp);
        resp
    }

    async fn write_response(
        &self,
        session: &mut Session,
        ctx: &RequestCtx,
        resp: ResponseCtx,
    ) -> pingora::Result<()> {
        let mut resp_header = ResponseHeader::build(resp.status, None)?;

        for (name, value) in resp.headers.iter() {
            resp_header.append_header(name.clone(), value.clone())?;
        }
        resp_header.insert_header(REQUEST_ID_HEADER, ctx.request_id.to_string())?;
        resp_header.insert_header(header::CONTENT_LENGTH, resp.body.len().to_string())?;

        if resp.body.is_empty() {
            session.write_response_header(Box::new(resp_header), true).await?;
            return Ok(());
        }

        session.write_response_header(Box::new(resp_header), false).await?;
        session
            .write_response_body(Some(resp.body.into()), true)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ProxyHttp for ExcuseGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        // request_filter always answers, so this is never reached.
        Err(Error::new(Custom(
            "ExcuseGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let mut ctx = RequestCtx::from_session(session);
        let resp = self.respond(&mut ctx).await;

        self.write_response(session, &ctx, resp).await?;
        Ok(true)
    }
}
