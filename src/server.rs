//! actix-web boundary: one multipart upload endpoint plus a liveness probe.

use crate::{
    error::ShibliError,
    models::{ErrorResponse, GhibliArtResponse},
    pipeline::GhibliPipeline,
};
use actix_multipart::Multipart;
use actix_web::{get, post, web, App, HttpResponse, HttpServer};
use futures::{StreamExt, TryStreamExt};

#[post("/generate-ghibli")]
async fn generate_ghibli(
    pipeline: web::Data<GhibliPipeline>,
    mut payload: Multipart,
) -> HttpResponse {
    let bytes = match read_file_field(&mut payload).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                detail: "missing file field in multipart upload".into(),
            })
        }
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                detail: format!("malformed multipart upload: {}", e),
            })
        }
    };

    log::info!("Received upload: {} bytes", bytes.len());

    match pipeline.run(&bytes).await {
        Ok(art) => HttpResponse::Ok().json(GhibliArtResponse {
            image_url: art.image_url,
        }),
        Err(err) => error_response(err),
    }
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

/// Buffers the first non-empty field of the upload.
async fn read_file_field(
    payload: &mut Multipart,
) -> std::result::Result<Option<Vec<u8>>, actix_multipart::MultipartError> {
    while let Some(mut field) = payload.try_next().await? {
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }
        if !bytes.is_empty() {
            return Ok(Some(bytes));
        }
    }
    Ok(None)
}

/// Image problems are the caller's to fix; everything else is on us or the
/// upstream services.
fn error_response(err: ShibliError) -> HttpResponse {
    log::error!("generate-ghibli failed: {}", err);
    let body = ErrorResponse {
        detail: err.to_string(),
    };
    if err.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        HttpResponse::InternalServerError().json(body)
    }
}

pub async fn run(pipeline: GhibliPipeline, port: u16) -> std::io::Result<()> {
    let pipeline = web::Data::new(pipeline);

    HttpServer::new(move || {
        App::new()
            .app_data(pipeline.clone())
            .service(generate_ghibli)
            .service(health)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{
        DescriptionResponse, ImageGenerationRequest, ImageGenerationResponse, NormalizedImage,
    };
    use crate::pipeline::{DescriptionProvider, GenerationProvider};
    use actix_web::test;
    use async_trait::async_trait;
    use std::io::Cursor;
    use std::sync::Arc;

    struct StubDescriber {
        fail: bool,
    }

    #[async_trait]
    impl DescriptionProvider for StubDescriber {
        async fn describe(&self, _image: &NormalizedImage) -> Result<DescriptionResponse> {
            if self.fail {
                return Err(ShibliError::DescriptionError("upstream 503".into()));
            }
            Ok(DescriptionResponse {
                description: "a lighthouse at dusk".into(),
                model: "stub-vision".into(),
            })
        }
    }

    struct StubGenerator;

    #[async_trait]
    impl GenerationProvider for StubGenerator {
        async fn generate(
            &self,
            _request: ImageGenerationRequest,
        ) -> Result<ImageGenerationResponse> {
            Ok(ImageGenerationResponse {
                image_url: "https://example.com/ghibli.png".into(),
                model: "stub-image".into(),
            })
        }
    }

    fn pipeline(describe_fails: bool) -> GhibliPipeline {
        GhibliPipeline::with_providers(
            Arc::new(StubDescriber {
                fail: describe_fails,
            }),
            Arc::new(StubGenerator),
        )
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            8,
            8,
            image::Rgb([200, 100, 50]),
        ));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn multipart_body(content: &[u8]) -> (String, Vec<u8>) {
        let boundary = "x-shibli-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"upload.png\"\r\nContent-Type: image/png\r\n\r\n",
                boundary
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", boundary),
            body,
        )
    }

    async fn post_upload(
        pipeline: GhibliPipeline,
        content: &[u8],
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pipeline))
                .service(generate_ghibli),
        )
        .await;

        let (content_type, body) = multipart_body(content);
        let req = test::TestRequest::post()
            .uri("/generate-ghibli")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_upload_generates_art() {
        let resp = post_upload(pipeline(false), &png_bytes()).await;
        assert_eq!(resp.status(), 200);

        let body: GhibliArtResponse = test::read_body_json(resp).await;
        assert_eq!(body.image_url, "https://example.com/ghibli.png");
    }

    #[actix_web::test]
    async fn test_corrupt_upload_is_rejected_with_400() {
        let resp = post_upload(pipeline(false), b"definitely not an image").await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.detail.contains("Invalid image format"));
    }

    #[actix_web::test]
    async fn test_empty_upload_is_rejected_with_400() {
        let resp = post_upload(pipeline(false), &[]).await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.detail.contains("missing file field"));
    }

    #[actix_web::test]
    async fn test_upstream_failure_maps_to_500() {
        let resp = post_upload(pipeline(true), &png_bytes()).await;
        assert_eq!(resp.status(), 500);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.detail.contains("upstream 503"));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
