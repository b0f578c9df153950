//! SES integration tests.

#[cfg(test)]
mod tests {
    use crate::ses_client;

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_verify_and_send() {
        let client = ses_client();
        let sender = "sender@example.com";

        client
            .verify_email_address(sender)
            .await
            .expect("verify_email_address");
        let verified = client
            .list_verified_email_addresses()
            .await
            .expect("list_verified_email_addresses");
        assert!(String::from_utf8_lossy(&verified).contains(sender));

        client
            .send_text_email(sender, "recipient@example.com", None, "Hello", "Hi there")
            .await
            .expect("send_text_email");
        client
            .send_raw_email(
                b"Subject: Hello\r\n\r\nHi there",
                sender,
                &["recipient@example.com"],
            )
            .await
            .expect("send_raw_email");

        client.get_send_quota().await.expect("get_send_quota");
        client.get_send_statistics().await.expect("get_send_statistics");

        client
            .delete_verified_email_address(sender)
            .await
            .expect("delete_verified_email_address");
    }
}
