//! S3 integration tests.

#[cfg(test)]
mod tests {
    use awsign_s3::PutObject;

    use crate::{s3_client, test_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_list_and_delete_bucket() {
        let client = s3_client();
        let bucket = test_name("bucket");

        client.create_bucket(&bucket).await.expect("create_bucket");

        let listing = client.list_buckets().await.expect("list_buckets");
        let listing = String::from_utf8_lossy(&listing);
        assert!(listing.contains(&bucket), "listing should contain {bucket}");

        client.delete_bucket(&bucket).await.expect("delete_bucket");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_round_trip_object() {
        let client = s3_client();
        let bucket = test_name("object");
        client.create_bucket(&bucket).await.expect("create_bucket");

        let path = ["docs", "hello world.txt"];
        let object = PutObject::new("hello").content_type("text/plain");
        let result = client
            .put_object(&bucket, &object, &path)
            .await
            .expect("put_object");
        assert!(result.etag.is_some());

        assert!(client.object_exists(&bucket, &path).await.expect("object_exists"));
        let body = client.get_object(&bucket, &path).await.expect("get_object");
        assert_eq!(body.as_ref(), b"hello");

        let listing = client
            .list_objects(&bucket, None, &["docs"])
            .await
            .expect("list_objects");
        assert!(String::from_utf8_lossy(&listing).contains("hello"));

        client.delete_object(&bucket, &path).await.expect("delete_object");
        assert!(!client.object_exists(&bucket, &path).await.expect("object_exists"));

        client.delete_bucket(&bucket).await.expect("delete_bucket");
    }
}
