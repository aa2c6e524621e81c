mod inference_client;
